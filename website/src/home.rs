use maud::{Markup, html};

use ehh_shell::identity::{self, contact};

/// Content of the home page. The shell around it is added by [`ehh_shell::build()`].
pub fn home() -> Markup {
    let programs = [
        ("Hospitality Management", "Lead hotels and resorts with a Swiss-inspired curriculum."),
        ("Culinary Arts", "Train in professional kitchens alongside working chefs."),
        ("Hospitality Business", "Learn the finance, marketing and operations behind great service."),
    ];

    html! {
        main {
            section.hero {
                h1 { (identity::SITE_NAME) }
                p { "Shaping Tomorrow's Global Hospitality Leaders" }
                p.lead { "Real-world training with MAF Accor Hotels and Resorts. 70% practical, 30% academic excellence." }
            }
            section.programs {
                @for (name, summary) in programs {
                    article {
                        h2 { (name) }
                        p { (summary) }
                    }
                }
            }
            footer {
                p { (identity::address::STREET) ", " (identity::address::LOCALITY) }
                a href=(format!("mailto:{}", contact::EMAIL)) { (contact::EMAIL) }
                " · "
                a href=(format!("tel:{}", contact::TELEPHONE)) { (contact::TELEPHONE) }
            }
        }
    }
}
