use yew::prelude::*;

use crate::config::{self, SponsorTierConfig};

#[derive(Properties, PartialEq)]
pub struct SponsorTierProps {
    pub tier: SponsorTierConfig,
}

#[function_component(SponsorTier)]
pub fn sponsor_tier(props: &SponsorTierProps) -> Html {
    let tier = &props.tier;
    let animation = &config::site().animation;

    html! {
        <div class="sponsor-tier" style={format!("background: {};", tier.tint)}>
            <h3>{format!("{} Sponsors", tier.title)}</h3>
            {
                if tier.sponsors.is_empty() {
                    html! { <p class="sponsor-empty">{"Spots open. Get in touch to sponsor."}</p> }
                } else {
                    html! {
                        <div class="sponsor-grid">
                            { for tier.sponsors.iter().enumerate().map(|(index, sponsor)| html! {
                                <div class="sponsor-card rise" style={animation.stagger_style(index)}>
                                    <img
                                        src={sponsor.logo.clone()}
                                        width="160"
                                        height="80"
                                        loading="lazy"
                                        alt={format!("{} Sponsor {}", tier.title, sponsor.name)}
                                    />
                                </div>
                            }) }
                        </div>
                    }
                }
            }
        </div>
    }
}
