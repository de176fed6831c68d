use pos_colorizer::pipelines::common::{Annotator, PartOfSpeech};
use pos_colorizer::pipelines::pos_tagging::{POSConfig, POSModel};
use pos_colorizer::resources::LocalResource;
use std::io::Write;

#[test]
fn pos_tagging_reconstructs_input() -> anyhow::Result<()> {
    //    Set-up model
    let pos_model = POSModel::new(Default::default())?;

    //    Define input
    let inputs = [
        "My name is Amy. I live in Paris.",
        "  leading and trailing spaces  ",
        "Tabs\tand\r\nWindows line endings\n\n",
        "Don't stop-believing... (right?)",
        "Prices rose 4.5% to $12,000 in 2023!",
        "Amélie's café, naïve résumé — ok?",
        "e-mail: someone@example.com #tag 🙂",
        "\n",
    ];

    //    Run model
    for input in inputs {
        let output = pos_model.annotate(input)?;
        let reconstructed: String = output.iter().map(|token| token.text.as_str()).collect();
        assert_eq!(reconstructed, input);
        for token in &output {
            assert!(!token.text.is_empty());
            assert_eq!(
                &input[token.offset.begin as usize..token.offset.end as usize],
                token.text
            );
            assert_eq!(token.is_whitespace, token.category == PartOfSpeech::Space);
        }
    }
    Ok(())
}

const FRAGMENTS: [&str; 32] = [
    "The", "cat", "can't", "cannot", "CANNOT", "won’t", "she's", "we'd", "Mr.", "e.g.", "U.S.",
    "etc.", "well-known", "(quoted)", "\"Wait...\"", "…", "café", "naïve", "e\u{301}", "🙂",
    "👩‍🔬", "$12,000", "4.5%", "21st", "someone@example.com", "https://example.com/a?b=c", "&",
    "¿Qué?", "¡Hola!", "日本語", "-", "'",
];

const SEPARATORS: [&str; 10] = [
    " ", "  ", "\n", "\r\n", "\t", "\u{a0}", "\u{2028}", "\u{3000}", "", " \n\u{a0} ",
];

/// Deterministic linear congruential generator
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}

#[test]
fn pos_tagging_reconstructs_generated_input() -> anyhow::Result<()> {
    let pos_model = POSModel::new(Default::default())?;
    let mut generator = Lcg(42);

    for _ in 0..500 {
        let mut input = String::new();
        for _ in 0..generator.next(12) {
            input.push_str(SEPARATORS[generator.next(SEPARATORS.len())]);
            input.push_str(FRAGMENTS[generator.next(FRAGMENTS.len())]);
        }
        if generator.next(2) == 0 {
            input.push_str(SEPARATORS[generator.next(SEPARATORS.len())]);
        }

        let output = pos_model.annotate(&input)?;

        let reconstructed: String = output.iter().map(|token| token.text.as_str()).collect();
        assert_eq!(reconstructed, input);
        for token in &output {
            assert!(!token.text.is_empty(), "{input:?}");
            let all_whitespace = token.text.chars().all(char::is_whitespace);
            assert_eq!(token.is_whitespace, all_whitespace, "{input:?}");
            assert_eq!(
                token.is_whitespace,
                token.category == PartOfSpeech::Space,
                "{input:?}"
            );
        }
    }
    Ok(())
}

#[test]
fn pos_tagging_scenario() -> anyhow::Result<()> {
    let pos_model = POSModel::new(Default::default())?;

    let output = pos_model.annotate("The cat runs.")?;

    let expected = [
        ("The", PartOfSpeech::Det),
        (" ", PartOfSpeech::Space),
        ("cat", PartOfSpeech::Noun),
        (" ", PartOfSpeech::Space),
        ("runs", PartOfSpeech::Verb),
        (".", PartOfSpeech::Punct),
    ];
    assert_eq!(output.len(), expected.len());
    for (token, (text, category)) in output.iter().zip(expected) {
        assert_eq!(token.text, text);
        assert_eq!(token.category, category);
    }
    Ok(())
}

#[test]
fn pos_tagging_newlines_are_tokens() -> anyhow::Result<()> {
    let pos_model = POSModel::new(Default::default())?;

    let output = pos_model.annotate("Hi\nthere")?;

    assert_eq!(output.len(), 3);
    assert_eq!(output[0].text, "Hi");
    assert_eq!(output[1].text, "\n");
    assert!(output[1].is_whitespace);
    assert_eq!(output[1].category, PartOfSpeech::Space);
    assert_eq!(output[2].text, "there");
    Ok(())
}

#[test]
fn pos_tagging_empty_input() -> anyhow::Result<()> {
    let pos_model = POSModel::new(Default::default())?;

    assert!(pos_model.annotate("")?.is_empty());
    assert_eq!(pos_model.predict(&[""])?, vec![vec![]]);
    Ok(())
}

#[test]
fn pos_tagging_is_deterministic() -> anyhow::Result<()> {
    let pos_model = POSModel::new(Default::default())?;
    let input = "She quickly read the old letters that her brother had sent from Rome.";

    let first = pos_model.annotate(input)?;
    let second = pos_model.annotate(input)?;
    let other_model = POSModel::new(Default::default())?.annotate(input)?;

    assert_eq!(first, second);
    assert_eq!(first, other_model);
    Ok(())
}

#[test]
fn pos_tagging_user_lexicon() -> anyhow::Result<()> {
    let mut lexicon_file = tempfile::NamedTempFile::new()?;
    write!(
        lexicon_file,
        r#"{{"entries": {{"blorf": "VERB", "zyx": ["NOUN"], "cat": {{"PROPN": 1.0}}}}}}"#
    )?;
    let pos_config = POSConfig::new(
        Some(LocalResource::from(lexicon_file.path().to_path_buf())),
        true,
    );
    let pos_model = POSModel::new(pos_config)?;

    let output = pos_model.annotate("They blorf cat")?;

    assert_eq!(output[2].text, "blorf");
    assert_eq!(output[2].category, PartOfSpeech::Verb);
    assert_eq!(output[4].text, "cat");
    assert_eq!(output[4].category, PartOfSpeech::Propn);
    Ok(())
}

#[test]
fn pos_tagging_missing_lexicon_file() {
    let pos_config = POSConfig::new(Some(LocalResource::from("does/not/exist.json")), true);
    assert!(POSModel::new(pos_config).is_err());
}

#[test]
fn pos_tagging_invalid_lexicon_file() -> anyhow::Result<()> {
    let mut lexicon_file = tempfile::NamedTempFile::new()?;
    write!(lexicon_file, r#"{{"entries": {{"blorf": "NOT_A_TAG"}}}}"#)?;
    let pos_config = POSConfig::new(
        Some(LocalResource::from(lexicon_file.path().to_path_buf())),
        true,
    );
    assert!(POSModel::new(pos_config).is_err());
    Ok(())
}
