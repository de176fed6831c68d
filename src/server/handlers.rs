// Copyright 2026 The pos-colorizer Authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::pipelines::colorization::ColorMap;
use crate::pipelines::pos_coloring::ColoredWord;
use crate::server::error::ApiError;
use crate::server::SharedState;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

pub(crate) async fn index(State(state): State<SharedState>) -> Html<String> {
    Html(state.index_page.clone())
}

/// `POST /tag` with a `{"text": "..."}` body. The content type is not checked.
pub(crate) async fn tag(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<Vec<ColoredWord>>, ApiError> {
    let text = parse_text(&body)?;
    let characters = text.chars().count();

    let words = tokio::task::spawn_blocking(move || state.pipeline.predict(&text))
        .await
        .map_err(|join_error| ApiError::ModelFault(format!("tagger crashed: {join_error}")))??;

    debug!(characters, tokens = words.len(), "tagged text");
    Ok(Json(words))
}

fn parse_text(body: &[u8]) -> Result<String, ApiError> {
    let request: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("request body is not valid JSON: {e}")))?;
    match request.get("text") {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(ApiError::BadRequest(
            "field `text` must be a string".to_string(),
        )),
        None => Err(ApiError::BadRequest(
            "missing required field `text`".to_string(),
        )),
    }
}

#[derive(Serialize)]
pub(crate) struct ColorsPayload {
    colors: ColorMap,
    fallback: String,
}

pub(crate) async fn colors(State(state): State<SharedState>) -> Json<ColorsPayload> {
    let color_map = state.pipeline.color_map();
    Json(ColorsPayload {
        colors: color_map.clone(),
        fallback: color_map.fallback().to_string(),
    })
}

pub(crate) async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn text_field_is_extracted() {
        assert_eq!(parse_text(br#"{"text": "Hi"}"#).unwrap(), "Hi");
        assert_eq!(parse_text(br#"{"text": "", "extra": 1}"#).unwrap(), "");
    }

    #[test]
    fn malformed_bodies_are_rejected() {
        for body in [
            &br#"{}"#[..],
            br#"{"text": 42}"#,
            br#"{"text": null}"#,
            br#"["text"]"#,
            br#"text=hello"#,
            b"",
        ] {
            assert!(matches!(parse_text(body), Err(ApiError::BadRequest(_))));
        }
    }

    #[test]
    fn colors_payload_lists_table_and_fallback() -> anyhow::Result<()> {
        let color_map = ColorMap::new(
            vec![
                ("VERB".to_string(), "#00ff00".to_string()),
                ("NOUN".to_string(), "#ff0000".to_string()),
            ],
            "#cccccc",
        );
        let payload = serde_json::to_string(&ColorsPayload {
            fallback: color_map.fallback().to_string(),
            colors: color_map,
        })?;
        assert_eq!(
            payload,
            r##"{"colors":{"VERB":"#00ff00","NOUN":"#ff0000"},"fallback":"#cccccc"}"##
        );
        Ok(())
    }
}
