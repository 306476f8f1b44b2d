use crate::domain::{Listing, ListingFields};
use crate::templates::{desktop_layout, listing_form};
use maud::{html, Markup};

pub fn edit_page(title: &str, base: &str, listing: &Listing) -> Markup {
    let action = format!("{base}/{}/edit", listing.internal_id);
    let values = ListingFields {
        title: listing.title.clone(),
        description: listing.description.clone(),
        isactive: listing.isactive,
    };

    desktop_layout(
        title,
        base,
        html! {
            h1 { (title) }
            (listing_form(&action, Some("PUT"), &values, "Update"))

            form method="post" action=(action) {
                input type="hidden" name="_method" value="DELETE";
                button type="submit" class="danger" { "Delete" }
            }
        },
    )
}
