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

//! Interactive page served at `/`. The color table is embedded as a JS object literal, the page
//! posts the textarea content to `/tag` 180 ms after the last keystroke and renders the tokens.

use crate::common::error::TaggerError;
use crate::pipelines::colorization::ColorMap;

const POS_COLORS_PLACEHOLDER: &str = "__POS_COLORS__";
const FALLBACK_COLOR_PLACEHOLDER: &str = "__FALLBACK_COLOR__";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<title>POS Color Tagger</title>
<style>
body { font-family: Arial, sans-serif; padding: 2em; background: #f7f7fa; }
#inputBox, #outputBox { width: 100%; font-size: 18px; box-sizing: border-box; }
#inputBox { height: 90px; }
#outputBox { border: 1px solid #ccc; background: #fff; min-height: 90px; padding: 1em; }
.word { padding: 1px 2px; border-radius: 3px; margin: 1px 0; display: inline-block; }
#legend { margin-top: 1.5em; font-size: 15px; }
.legend-block { display: inline-block; padding: 3px 7px; margin-right: 6px; border-radius: 3px; }
#status { color: #aa0000; font-size: 14px; min-height: 1.2em; }
</style>
</head>
<body>
<h2>POS Color Tagger</h2>
<p>Type or paste English text below. Each word will be colored by its part of speech.</p>
<textarea id="inputBox" placeholder="Enter text..."></textarea>
<div id="status"></div>
<div id="outputBox"></div>
<div id="legend"></div>
<script>
const POS_COLORS = __POS_COLORS__;
const FALLBACK_COLOR = __FALLBACK_COLOR__;
const EMPTY_COLOR = '#eeeeee';

function escapeHtml(text) {
    return text
        .replace(/&/g, '&amp;')
        .replace(/</g, '&lt;')
        .replace(/>/g, '&gt;')
        .replace(/"/g, '&quot;')
        .replace(/'/g, '&#39;');
}

function renderLegend() {
    let html = '';
    for (const pos in POS_COLORS) {
        if (!POS_COLORS[pos]) continue;
        html += '<span class="legend-block" style="background:' + escapeHtml(POS_COLORS[pos]) + '">'
            + escapeHtml(pos) + '</span>';
    }
    html += '<span class="legend-block" style="background:' + escapeHtml(FALLBACK_COLOR) + '">other</span>';
    document.getElementById('legend').innerHTML = '<b>Legend:</b> ' + html;
}

function renderOutput(words) {
    let html = '';
    for (const {text, pos, color} of words) {
        if (pos === 'SPACE' || text.trim() === '') {
            html += escapeHtml(text).replace(/\r?\n/g, '<br>');
            continue;
        }
        html += '<span class="word" style="background:' + escapeHtml(color || EMPTY_COLOR)
            + '" title="' + escapeHtml(pos) + '">' + escapeHtml(text) + '</span>';
    }
    document.getElementById('outputBox').innerHTML = html;
}

renderLegend();

let debounceTimer;
let latestRequest = 0;
document.getElementById('inputBox').addEventListener('input', function() {
    clearTimeout(debounceTimer);
    const val = this.value;
    debounceTimer = setTimeout(() => {
        const request = ++latestRequest;
        fetch('/tag', {
            method: 'POST',
            headers: {'Content-Type': 'application/json'},
            body: JSON.stringify({text: val})
        })
        .then(resp => resp.json().then(body => ({ok: resp.ok, body})))
        .then(({ok, body}) => {
            if (request !== latestRequest) return;
            if (!ok) {
                document.getElementById('status').textContent = body.error || 'tagging failed';
                return;
            }
            document.getElementById('status').textContent = '';
            renderOutput(body);
        })
        .catch(err => {
            if (request === latestRequest) {
                document.getElementById('status').textContent = String(err);
            }
        });
    }, 180);
});
</script>
</body>
</html>
"#;

/// Renders the page for a color table
pub fn render_index(color_map: &ColorMap) -> Result<String, TaggerError> {
    let pos_colors = script_safe(serde_json::to_string(color_map)?);
    let fallback = script_safe(serde_json::to_string(color_map.fallback())?);
    Ok(PAGE_TEMPLATE
        .replace(POS_COLORS_PLACEHOLDER, &pos_colors)
        .replace(FALLBACK_COLOR_PLACEHOLDER, &fallback))
}

// JSON embedded in a <script> element must not be able to close it
fn script_safe(json: String) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn page_embeds_the_color_table() -> anyhow::Result<()> {
        let page = render_index(&ColorMap::default())?;
        assert!(page.contains(r##"const POS_COLORS = {"NOUN":"#ff4444","PROPN":"#ff4444""##));
        assert!(page.contains(r##"const FALLBACK_COLOR = "#bbbbbb";"##));
        assert!(!page.contains(POS_COLORS_PLACEHOLDER));
        Ok(())
    }

    #[test]
    fn embedded_json_cannot_close_the_script() -> anyhow::Result<()> {
        let color_map = ColorMap::new(
            vec![("</script><b>".to_string(), "red".to_string())],
            "#bbbbbb",
        );
        let page = render_index(&color_map)?;
        assert!(!page.contains("</script><b>"));
        assert!(page.contains(r#""\u003c/script\u003e\u003cb\u003e":"red""#));
        Ok(())
    }
}
