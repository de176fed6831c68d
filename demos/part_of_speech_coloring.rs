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

extern crate anyhow;

use pos_colorizer::pipelines::pos_coloring::POSColoringPipeline;

fn main() -> anyhow::Result<()> {
    //    Set-up pipeline
    let pipeline = POSColoringPipeline::new(Default::default())?;

    //    Define input
    let input = "My name is Bob.\nHe doesn't like rainy days, but he loves the sea!";

    //    Run pipeline
    let output = pipeline.predict(input)?;
    for (position, word) in output.iter().enumerate() {
        println!("{position} - {:?} {} {}", word.text, word.pos, word.color);
    }

    Ok(())
}
