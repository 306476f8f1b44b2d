use crate::tests::utils::{
    get_json, init_test_state, init_test_state_at, location, read_body, read_json, send,
    send_form,
};
use http::Method;
use serde_json::json;

fn create_via_form(state: &crate::router::RouterState, form: &str) -> String {
    let resp = send_form(state, Method::POST, "/listings", form);
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/listings");

    let listings = read_json(get_json(state, "/listings"));
    listings.as_array().unwrap().last().unwrap()["_id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[test]
fn index_page_renders_listings() {
    let state = init_test_state();
    create_via_form(&state, "title=Cozy+Loft&description=Downtown&isactive=true");

    let resp = send(&state, Method::GET, "/listings", Some("text/html"), None);
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = read_body(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("All my Listings"));
    assert!(body.contains("Cozy Loft"));
}

#[test]
fn missing_accept_header_defaults_to_html() {
    let state = init_test_state();

    let resp = send(&state, Method::GET, "/listings", None, None);
    assert_eq!(resp.status(), 200);
    assert!(read_body(resp).contains("All my Listings"));
}

#[test]
fn create_page_is_always_html() {
    let state = init_test_state();

    let resp = send(&state, Method::GET, "/listings/create", Some("application/json"), None);
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("Create New Listing"));
    assert!(body.contains(r#"action="/listings""#));
    assert!(body.contains(r#"name="isactive""#));
}

#[test]
fn form_post_stores_cast_values() {
    let state = init_test_state();
    let id = create_via_form(&state, "title=Apt+1&description=Nice&isactive=false");

    let fetched = read_json(get_json(&state, &format!("/listings/{id}")));
    assert_eq!(fetched["title"], "Apt 1");
    assert_eq!(fetched["description"], "Nice");
    assert_eq!(fetched["isactive"], false);
}

#[test]
fn show_and_edit_pages_render_the_listing() {
    let state = init_test_state();
    let id = create_via_form(&state, "title=Garden+Flat&description=Quiet&isactive=true");

    let show = read_body(send(&state, Method::GET, &format!("/listings/{id}"), Some("text/html"), None));
    assert!(show.contains("Garden Flat"));
    assert!(show.contains("Quiet"));
    assert!(show.contains(&format!("/listings/{id}/edit")));

    let edit = read_body(send(
        &state,
        Method::GET,
        &format!("/listings/{id}/edit"),
        Some("text/html"),
        None,
    ));
    assert!(edit.contains(&format!("Listing {id}")));
    assert!(edit.contains(r#"name="_method" value="PUT""#));
    assert!(edit.contains(r#"value="Garden Flat""#));
}

#[test]
fn method_override_put_redirects_to_the_listing() {
    let state = init_test_state();
    let id = create_via_form(&state, "title=Before&isactive=true");

    let resp = send_form(
        &state,
        Method::POST,
        &format!("/listings/{id}/edit"),
        "_method=PUT&title=After&description=Updated&isactive=false",
    );
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), format!("/listings/{id}"));

    let fetched = read_json(get_json(&state, &format!("/listings/{id}")));
    assert_eq!(fetched["title"], "After");
    assert_eq!(fetched["description"], "Updated");
    assert_eq!(fetched["isactive"], false);
    assert!(fetched.get("_method").is_none());
}

#[test]
fn method_override_delete_redirects_to_the_index() {
    let state = init_test_state();
    let id = create_via_form(&state, "title=Short+lived");

    let resp = send_form(
        &state,
        Method::POST,
        &format!("/listings/{id}/edit"),
        "_method=DELETE",
    );
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/listings");

    assert_eq!(read_json(get_json(&state, "/listings")), json!([]));
}

#[test]
fn resource_can_be_mounted_elsewhere() {
    let state = init_test_state_at("/api/items");

    let resp = send_form(&state, Method::POST, "/api/items", "title=Moved");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/api/items");

    let listings = read_json(get_json(&state, "/api/items/"));
    assert_eq!(listings[0]["title"], "Moved");

    let resp = get_json(&state, "/listings");
    assert_eq!(resp.status(), 404);
}

#[test]
fn edit_form_keeps_an_unset_flag_unset() {
    let state = init_test_state();
    let id = create_via_form(&state, "title=No+flag");

    let edit = read_body(send(
        &state,
        Method::GET,
        &format!("/listings/{id}/edit"),
        Some("text/html"),
        None,
    ));
    assert!(edit.contains(r#"<option value="" selected>"#));
    assert!(edit.contains(r#"<option value="true">"#));

    let resp = send_form(
        &state,
        Method::POST,
        &format!("/listings/{id}/edit"),
        "_method=PUT&title=No+flag&description=&isactive=",
    );
    assert_eq!(resp.status(), 302);

    let fetched = read_json(get_json(&state, &format!("/listings/{id}")));
    assert!(fetched.get("isactive").is_none());
}
