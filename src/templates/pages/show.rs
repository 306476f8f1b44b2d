use crate::domain::Listing;
use crate::templates::{active_badge, desktop_layout};
use maud::{html, Markup};

pub fn show_page(base: &str, listing: &Listing) -> Markup {
    let title = listing.title.as_deref().unwrap_or("(untitled)");
    let edit_url = format!("{base}/{}/edit", listing.internal_id);

    desktop_layout(
        title,
        base,
        html! {
            article class="listing" {
                h1 { (title) " " (active_badge(listing.isactive)) }
                p { (listing.description.as_deref().unwrap_or("")) }
                dl {
                    dt { "ID" }
                    dd { code { (listing.internal_id.to_string()) } }
                }
            }

            div class="actions" {
                a href=(edit_url) { "Edit" }
                form method="post" action=(edit_url) {
                    input type="hidden" name="_method" value="DELETE";
                    button type="submit" class="danger" { "Delete" }
                }
            }
        },
    )
}
