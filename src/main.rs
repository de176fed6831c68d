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

use anyhow::Context;
use clap::{Parser, ValueEnum};
use pos_colorizer::pipelines::colorization::ColorMap;
use pos_colorizer::pipelines::common::Annotator;
use pos_colorizer::pipelines::pos_coloring::POSColoringPipeline;
use pos_colorizer::pipelines::pos_tagging::{POSConfig, POSModel};
use pos_colorizer::resources::LocalResource;
use pos_colorizer::server::{serve, AppState, ServerConfig, DEFAULT_MAX_BODY_BYTES};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// Built-in lexicon tagger
    Lexicon,
    /// Pretrained MobileBERT tagger (requires the `bert` feature)
    Bert,
}

/// Serves a web page coloring English text by part of speech
#[derive(Parser, Debug)]
#[command(name = "pos-colorizer", version, about)]
struct Args {
    /// Address to bind
    #[arg(long, env = "POS_COLORIZER_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to bind
    #[arg(long, env = "POS_COLORIZER_PORT", default_value_t = 5050)]
    port: u16,

    /// JSON color table, `{"fallback": "#...", "colors": {"NOUN": "#...", ...}}`
    #[arg(long, env = "POS_COLORIZER_COLORS")]
    colors: Option<PathBuf>,

    /// JSON user lexicon, `{"entries": {"word": "NOUN", ...}}`
    #[arg(long, env = "POS_COLORIZER_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Maximum request body size
    #[arg(long, env = "POS_COLORIZER_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    max_body_bytes: usize,

    /// Tagging backend
    #[arg(long, value_enum, default_value_t = Backend::Lexicon)]
    backend: Backend,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    // Models are loaded before the runtime starts: the pretrained backend may download its
    // weights with a blocking client.
    let color_map = match &args.colors {
        Some(path) => ColorMap::from_resource(&LocalResource::from(path.clone()))
            .with_context(|| format!("failed to load the color table {}", path.display()))?,
        None => ColorMap::default(),
    };
    let annotator = build_annotator(&args)?;
    let pipeline = POSColoringPipeline::new_with_annotator(annotator, color_map);
    let state = Arc::new(AppState::new(pipeline).context("failed to render the index page")?);
    info!(backend = ?args.backend, colors = ?args.colors, "tagger ready");

    let config = ServerConfig::new(SocketAddr::new(args.host, args.port), args.max_body_bytes)
        .context("invalid --max-body-bytes")?;
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?
        .block_on(serve(config.clone(), state))
        .with_context(|| format!("server error on {}", config.addr))
}

fn build_annotator(args: &Args) -> anyhow::Result<Box<dyn Annotator>> {
    match args.backend {
        Backend::Lexicon => {
            let pos_config = POSConfig::new(args.lexicon.clone().map(LocalResource::from), true);
            let model = POSModel::new(pos_config).context("failed to load the lexicon tagger")?;
            Ok(Box::new(model))
        }
        #[cfg(feature = "bert")]
        Backend::Bert => {
            use pos_colorizer::pipelines::bert_tagging::BertPOSAnnotator;
            if args.lexicon.is_some() {
                tracing::warn!("--lexicon is ignored by the bert backend");
            }
            let model = BertPOSAnnotator::new(Default::default())
                .context("failed to load the pretrained tagger")?;
            Ok(Box::new(model))
        }
        #[cfg(not(feature = "bert"))]
        Backend::Bert => anyhow::bail!("the bert backend requires building with `--features bert`"),
    }
}
