use crate::config::mount_root;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, base: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    h3 { "Listings" }
                    nav {
                        ul {
                            li { a href=(mount_root(base)) { "All Listings" } }
                            li { a href=(format!("{base}/create")) { "New Listing" } }
                        }
                    }
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}
