//! Helpers shared by the collection handlers: query parsing and the
//! get/list/create/update/delete flow every collection follows.

use std::collections::HashMap;
use std::str::FromStr;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::value::StrDeserializer;
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Serialize};

use wms_core::{DomainResult, Entity, RecordId};
use wms_infra::RecordStore;

use crate::app::envelope::{self, ApiResponse};
use crate::app::errors;

/// Raw query string parameters.
pub type Params = HashMap<String, String>;

/// PUT body: the record id plus the fields to change.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest<P> {
    pub id: RecordId,
    #[serde(flatten)]
    pub patch: P,
}

/// Query value, ignoring blanks.
pub fn param<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
    params.get(key).map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn invalid(key: &str, raw: &str) -> Response {
    errors::json_error(StatusCode::BAD_REQUEST, format!("Invalid {key}: {raw}"))
}

/// Parse a scalar query value (`warehouseId=2`, `limit=5`).
pub fn parse_param<T: FromStr>(params: &Params, key: &str) -> Result<Option<T>, Response> {
    param(params, key)
        .map(|raw| raw.parse().map_err(|_| invalid(key, raw)))
        .transpose()
}

/// Parse a snake_case enum query value (`status=in_progress`).
pub fn enum_param<T: DeserializeOwned>(params: &Params, key: &str) -> Result<Option<T>, Response> {
    param(params, key)
        .map(|raw| {
            let de: StrDeserializer<'_, serde::de::value::Error> = raw.into_deserializer();
            T::deserialize(de).map_err(|_| invalid(key, raw))
        })
        .transpose()
}

pub fn text_param(params: &Params, key: &str) -> Option<String> {
    param(params, key).map(str::to_owned)
}

fn id_param(params: &Params) -> Result<Option<RecordId>, Response> {
    parse_param(params, "id")
}

fn not_found<T: Entity>(id: RecordId) -> Response {
    tracing::debug!(resource = T::RESOURCE, %id, "record not found");
    errors::json_error(StatusCode::NOT_FOUND, format!("{} not found", T::RESOURCE))
}

/// `?id=N` returns one record; otherwise the records `keep` accepts.
pub fn list_or_get<T, S>(store: &S, params: &Params, keep: impl Fn(&T) -> bool) -> Response
where
    T: Entity + Serialize,
    S: RecordStore<T>,
{
    let id = match id_param(params) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    if let Some(id) = id {
        return match store.get(id) {
            Ok(Some(record)) => envelope::ok(record),
            Ok(None) => not_found::<T>(id),
            Err(e) => errors::store_error_to_response(e),
        };
    }

    match store.list() {
        Ok(records) => envelope::ok(records.into_iter().filter(|r| keep(r)).collect::<Vec<_>>()),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub fn create_record<T, S>(store: &S, build: impl FnOnce(RecordId) -> DomainResult<T>) -> Response
where
    T: Entity + Serialize,
    S: RecordStore<T>,
{
    match store.insert_with(build) {
        Ok(record) => {
            tracing::info!(resource = T::RESOURCE, id = %record.id(), "record created");
            envelope::created(record)
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub fn update_record<T, S>(
    store: &S,
    id: RecordId,
    mutate: impl FnOnce(&mut T) -> DomainResult<()>,
) -> Response
where
    T: Entity + Serialize,
    S: RecordStore<T>,
{
    match store.update(id, mutate) {
        Ok(record) => {
            tracing::info!(resource = T::RESOURCE, %id, "record updated");
            envelope::ok(record)
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub fn delete_record<T, S>(store: &S, params: &Params) -> Response
where
    T: Entity,
    S: RecordStore<T>,
{
    let id = match id_param(params) {
        Ok(Some(id)) => id,
        Ok(None) => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                format!("{} ID is required", T::RESOURCE),
            );
        }
        Err(resp) => return resp,
    };

    match store.remove(id) {
        Ok(_) => {
            tracing::info!(resource = T::RESOURCE, %id, "record deleted");
            (
                StatusCode::OK,
                Json(ApiResponse::message(
                    true,
                    format!("{} deleted successfully", T::RESOURCE),
                )),
            )
                .into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wms_orders::OrderStatus;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn blank_values_are_ignored() {
        let p = params(&[("status", "  ")]);
        assert!(matches!(enum_param::<OrderStatus>(&p, "status"), Ok(None)));
    }

    #[test]
    fn enum_values_use_wire_names() {
        let p = params(&[("status", "processing")]);
        assert!(matches!(
            enum_param::<OrderStatus>(&p, "status"),
            Ok(Some(OrderStatus::Processing))
        ));
    }

    #[test]
    fn unknown_enum_value_is_a_bad_request() {
        let p = params(&[("status", "lost")]);
        match enum_param::<OrderStatus>(&p, "status") {
            Err(resp) => assert_eq!(resp.status(), StatusCode::BAD_REQUEST),
            Ok(_) => panic!("expected a rejection"),
        }
    }

    #[test]
    fn numeric_params_parse() {
        let p = params(&[("warehouseId", "2"), ("limit", "x")]);
        assert_eq!(
            parse_param::<RecordId>(&p, "warehouseId").ok().flatten(),
            Some(RecordId::new(2))
        );
        assert!(parse_param::<usize>(&p, "limit").is_err());
    }
}
