use crate::config::mount_root;
use crate::db::ListingRepo;
use crate::domain::{Listing, ListingFields, ObjectId, MODEL_NAME};
use crate::errors::ServerError;
use crate::request::{decode_body, resolve_method, BodyFields};
use crate::responses::{
    error_to_response, html_response, json_response, redirect, text_response, Format, ResultResp,
};
use crate::templates::pages;
use astra::{Request, Response};
use http::header::ACCEPT;
use http::Method;
use serde::Serialize;
use tracing::{debug, error, info, warn};

const INDEX_TITLE: &str = "All my Listings";
const CREATE_TITLE: &str = "Create New Listing";
const CREATE_FAILED: &str = "There was a problem adding the information to the database.";
const UPDATE_FAILED: &str = "There was a problem updating the information to the database";

/// Everything a request handler needs, built once in `main`.
#[derive(Clone, Debug)]
pub struct RouterState {
    pub listings: ListingRepo,
    /// Mount point of the listings resource, e.g. `/listings` (no trailing slash).
    pub base_path: String,
}

impl RouterState {
    fn index_url(&self) -> &str {
        mount_root(&self.base_path)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Route<'a> {
    Index,
    Create,
    New,
    Show(&'a str),
    Edit(&'a str),
    Update(&'a str),
    Delete(&'a str),
}

#[derive(Serialize)]
struct Message {
    message: String,
}

#[derive(Serialize)]
struct Deleted<'a> {
    message: &'static str,
    item: &'a Listing,
}

/// Handle a request, sending any error through the generic error page.
pub fn respond(req: Request, state: &RouterState) -> Response {
    handle(req, state).unwrap_or_else(error_to_response)
}

pub fn handle(mut req: Request, state: &RouterState) -> ResultResp {
    let path = req.uri().path().to_string();
    let rest = strip_base(&path, &state.base_path).ok_or(ServerError::NotFound)?;

    let mut body = decode_body(&mut req)?;
    let method = resolve_method(req.method(), &mut body);
    let format = Format::negotiate(req.headers().get(ACCEPT).and_then(|v| v.to_str().ok()));

    debug!(%method, path = %path, ?format, "routing request");

    let route = match_route(&method, rest).ok_or(ServerError::NotFound)?;

    match route {
        Route::Index => index(state, format),
        Route::Create => create(state, &body, format),
        Route::New => html_response(pages::create_page(CREATE_TITLE, &state.base_path)),
        Route::Show(raw) => with_valid_id(state, raw, format, |id| show(state, &id, format)),
        Route::Edit(raw) => with_valid_id(state, raw, format, |id| edit(state, &id, format)),
        Route::Update(raw) => {
            with_valid_id(state, raw, format, |id| update(state, &id, &body, format))
        }
        Route::Delete(raw) => with_valid_id(state, raw, format, |id| delete(state, &id, format)),
    }
}

/// Path relative to the mount point, or `None` when the request is not ours.
fn strip_base<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    if base.is_empty() {
        return Some(path);
    }

    match path.strip_prefix(base)? {
        "" => Some("/"),
        rest if rest.starts_with('/') => Some(rest),
        _ => None,
    }
}

fn match_route<'a>(method: &Method, rest: &'a str) -> Option<Route<'a>> {
    let trimmed = rest.strip_prefix('/').unwrap_or(rest);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    let segments: Vec<&str> = if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    };

    if segments.iter().any(|s| s.is_empty()) {
        return None;
    }

    let verb = if method == Method::HEAD {
        "GET"
    } else {
        method.as_str()
    };

    match (verb, segments.as_slice()) {
        ("GET", []) => Some(Route::Index),
        ("POST", []) => Some(Route::Create),
        ("GET", ["create"]) => Some(Route::New),
        ("GET", [id]) => Some(Route::Show(*id)),
        ("GET", [id, "edit"]) => Some(Route::Edit(*id)),
        ("PUT", [id, "edit"]) => Some(Route::Update(*id)),
        ("DELETE", [id, "edit"]) => Some(Route::Delete(*id)),
        _ => None,
    }
}

/// `:id` parameter check, run ahead of every `/:id` handler.
///
/// Any lookup failure counts as not found: HTML callers get the generic 404 page,
/// JSON callers a `{"message": ...}` body.
fn with_valid_id<F>(state: &RouterState, raw_id: &str, format: Option<Format>, handler: F) -> ResultResp
where
    F: FnOnce(ObjectId) -> ResultResp,
{
    let found = ObjectId::parse_str(raw_id).and_then(|id| state.listings.find_by_id(&id));

    match found {
        Ok(listing) => handler(listing.internal_id),
        Err(e) => {
            warn!(error = %e, "{raw_id} was not found");
            match format.ok_or(ServerError::NotAcceptable)? {
                Format::Html => Err(ServerError::NotFound),
                Format::Json => json_response(
                    404,
                    &Message {
                        message: format!("404 Error: {}", ServerError::NotFound),
                    },
                ),
            }
        }
    }
}

fn load(state: &RouterState, id: &ObjectId, action: &str) -> Result<Listing, ServerError> {
    state.listings.find_by_id(id).map_err(|e| {
        error!(%id, error = %e, "{action} Error: There was a problem retrieving");
        e
    })
}

fn index(state: &RouterState, format: Option<Format>) -> ResultResp {
    let listings = state.listings.find_all().map_err(|e| {
        error!(error = %e, "GET Error: could not list {MODEL_NAME} documents");
        e
    })?;

    match format.ok_or(ServerError::NotAcceptable)? {
        Format::Html => html_response(pages::index_page(INDEX_TITLE, &state.base_path, &listings)),
        Format::Json => json_response(200, &listings),
    }
}

fn create(state: &RouterState, body: &BodyFields, format: Option<Format>) -> ResultResp {
    let created = ListingFields::cast(body).and_then(|fields| state.listings.create(&fields));

    let listing = match created {
        Ok(listing) => listing,
        Err(e) => {
            error!(error = %e, "POST Error: could not create listing");
            return text_response(CREATE_FAILED);
        }
    };

    info!("POST creating new listing: {listing}");

    match format.ok_or(ServerError::NotAcceptable)? {
        Format::Html => redirect(state.index_url()),
        Format::Json => json_response(200, &listing),
    }
}

fn show(state: &RouterState, id: &ObjectId, format: Option<Format>) -> ResultResp {
    let listing = load(state, id, "GET")?;
    debug!("GET Retrieving ID: {}", listing.internal_id);

    match format.ok_or(ServerError::NotAcceptable)? {
        Format::Html => html_response(pages::show_page(&state.base_path, &listing)),
        Format::Json => json_response(200, &listing),
    }
}

fn edit(state: &RouterState, id: &ObjectId, format: Option<Format>) -> ResultResp {
    let listing = load(state, id, "GET")?;
    debug!("GET Retrieving ID: {}", listing.internal_id);

    match format.ok_or(ServerError::NotAcceptable)? {
        Format::Html => {
            let title = format!("{MODEL_NAME} {}", listing.internal_id);
            html_response(pages::edit_page(&title, &state.base_path, &listing))
        }
        Format::Json => json_response(200, &listing),
    }
}

/// The JSON body is the document as it was *before* the update.
fn update(state: &RouterState, id: &ObjectId, body: &BodyFields, format: Option<Format>) -> ResultResp {
    let listing = load(state, id, "PUT")?;

    let updated = ListingFields::cast(body).and_then(|fields| state.listings.update(id, &fields));
    if let Err(e) = updated {
        error!(%id, error = %e, "PUT Error: could not update listing");
        return text_response(format!("{UPDATE_FAILED}: {e}"));
    }

    info!("PUT updating ID: {id}");

    match format.ok_or(ServerError::NotAcceptable)? {
        Format::Html => redirect(&format!("{}/{}", state.base_path, listing.internal_id)),
        Format::Json => json_response(200, &listing),
    }
}

fn delete(state: &RouterState, id: &ObjectId, format: Option<Format>) -> ResultResp {
    let listing = load(state, id, "DELETE")?;
    let removed = state.listings.remove(listing).map_err(|e| {
        error!(%id, error = %e, "DELETE Error: could not remove listing");
        e
    })?;

    info!("DELETE removing ID: {}", removed.internal_id);

    match format.ok_or(ServerError::NotAcceptable)? {
        Format::Html => redirect(state.index_url()),
        Format::Json => json_response(
            200,
            &Deleted {
                message: "deleted",
                item: &removed,
            },
        ),
    }
}
