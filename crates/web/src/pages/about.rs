//! About Page Handler

use herbarium::site::Site;
use maud::{Markup, html};
use salvo::prelude::*;

use crate::{
    components::layout::{Head, document},
    extensions::*,
    pages::{Page, PageError},
};

const VALUES: [(&str, &str); 4] = [
    (
        "Authenticity",
        "Formulations follow classical Ayurvedic texts, prepared the traditional way.",
    ),
    (
        "Purity",
        "Herbs are sourced from trusted growers and tested for quality at every batch.",
    ),
    (
        "Holistic Care",
        "We look after the whole person: body, mind and daily routine.",
    ),
    (
        "Community",
        "We share what we know freely through our articles, blog and consultations.",
    ),
];

const MILESTONES: [(&str, &str, &str); 4] = [
    ("1985", "A Corner Store", "Corner Medical Stores opens its doors in Solapur."),
    ("2000", "Own Formulations", "We begin preparing our own herbal formulations."),
    ("2015", "Certified Practitioners", "Ayurvedic consultations join the store."),
    ("2024", "Online", "Our remedies and knowledge library come online."),
];

fn render(site: &Site) -> Markup {
    let content = html! {
        section.page-header {
            h1 { "Preserving Ayurvedic Heritage for Modern Wellness" }
            p {
                "For nearly four decades we have been dedicated to preserving the ancient \
                 wisdom of Ayurveda while making it accessible to the modern world."
            }
        }
        section.mission {
            div {
                h2 { "Our Mission" }
                p {
                    "To make authentic Ayurvedic wellness accessible to everyone by preserving \
                     traditional knowledge and holding every product to the highest standard."
                }
            }
            div {
                h2 { "Our Vision" }
                p {
                    "To be the most trusted source of authentic Ayurvedic products, bridging \
                     ancient wisdom and modern science."
                }
            }
        }
        section.values {
            h2 { "Our Core Values" }
            div.grid {
                @for (title, description) in VALUES {
                    div.card {
                        h3 { (title) }
                        p { (description) }
                    }
                }
            }
        }
        section.timeline id="heritage" {
            h2 { "Our Journey" }
            ol {
                @for (year, title, description) in MILESTONES {
                    li {
                        span.year { (year) }
                        h3 { (title) }
                        p { (description) }
                    }
                }
            }
        }
        section.cta {
            h2 { "Join Our Wellness Community" }
            a.button href="/products" { "Shop Products" }
            a.button.secondary href="/contact" { "Get in Touch" }
        }
    };

    let head = Head {
        title: Some("About Us"),
        description: Some(
            "Our story, mission and values: decades of preserving authentic Ayurvedic tradition.",
        ),
        path: "/about",
        ..Head::default()
    };

    document(site, &head, content)
}

/// About Page Handler
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Page, PageError> {
    let state = depot.state_or_500()?;

    Ok(Page::new(render(&state.site)))
}
