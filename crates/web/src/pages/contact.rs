//! Contact Page Handler

use herbarium::site::Site;
use maud::{Markup, html};
use salvo::prelude::*;

use crate::{
    components::layout::{Head, document},
    extensions::*,
    pages::{Page, PageError},
};

const CONTACT_CARDS: [(&str, [&str; 3]); 3] = [
    (
        "Visit Our Store",
        ["Corner Ayurveda", "Gold Finch Peth, near Datta Mandir", "Solapur, Maharashtra, India"],
    ),
    (
        "Call Us",
        ["+91 98765 43210", "Mon-Sat: 9:00 AM - 7:00 PM", "Sunday: 10:00 AM - 5:00 PM"],
    ),
    (
        "Email Us",
        ["info@cornerayurveda.com", "support@cornerayurveda.com", "orders@cornerayurveda.com"],
    ),
];

fn field(label: &str, name: &str, kind: &str, required: bool) -> Markup {
    html! {
        label {
            (label) @if required { " *" }
            input type=(kind) name=(name) required[required];
        }
    }
}

/// The contact form. Submissions go to an external endpoint; without one the
/// form renders disabled.
fn form(action: Option<&str>) -> Markup {
    html! {
        form.contact-form method="post" action=[action] {
            fieldset disabled[action.is_none()] {
                div.row {
                    (field("First Name", "first_name", "text", true))
                    (field("Last Name", "last_name", "text", true))
                }
                (field("Email Address", "email", "email", true))
                (field("Phone Number", "phone", "tel", false))
                (field("Subject", "subject", "text", true))
                label {
                    "Message *"
                    textarea name="message" rows="6" required {}
                }
                button type="submit" { "Send Message" }
            }
            @if action.is_none() {
                p.notice { "The contact form is unavailable right now. Please call or email us." }
            }
        }
    }
}

fn render(site: &Site) -> Markup {
    let content = html! {
        section.page-header {
            h1 { "Get in Touch" }
            p { "Questions about a product or a consultation? We reply within 24 hours." }
        }
        div.contact {
            (form(site.contact_form_action.as_deref()))
            div.contact-cards {
                @for (title, lines) in CONTACT_CARDS {
                    div.card {
                        h3 { (title) }
                        @for line in lines {
                            p { (line) }
                        }
                    }
                }
            }
        }
    };

    let head = Head {
        title: Some("Contact Us"),
        description: Some(
            "Get in touch for Ayurvedic consultations, product enquiries or questions about natural health.",
        ),
        path: "/contact",
        ..Head::default()
    };

    document(site, &head, content)
}

/// Contact Page Handler
#[handler]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Page, PageError> {
    let state = depot.state_or_500()?;

    Ok(Page::new(render(&state.site)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_posts_to_configured_endpoint() {
        let html = form(Some("https://forms.example.com/contact")).into_string();

        assert!(
            html.contains(r#"action="https://forms.example.com/contact""#),
            "{html}"
        );
        assert!(!html.contains("disabled"), "{html}");

        for name in ["first_name", "last_name", "email", "phone", "subject", "message"] {
            assert!(html.contains(&format!(r#"name="{name}""#)), "missing {name}");
        }
    }

    #[test]
    fn form_without_endpoint_is_disabled() {
        let html = form(None).into_string();

        assert!(!html.contains("action="), "{html}");
        assert!(html.contains("<fieldset disabled>"), "{html}");
    }
}
