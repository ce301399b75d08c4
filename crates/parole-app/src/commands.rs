use std::path::Path;

use parole_config::Config;
use parole_lang_french::{FrenchMorphology, FrenchPreprocessor, FrenchProcessor};
use parole_search::{SearchRanker, highlight_text};
use parole_types::{Level, QuestionRecord, QuestionType, Segment};
use parole_vocab::{JsonFileStore, VocabularyStore};

use crate::ExportFormat;
use crate::corpus::load_corpus;
use crate::stats::CorpusStats;

pub struct SearchOptions {
    pub question_type: Option<QuestionType>,
    pub level: Option<Level>,
    pub highlight: bool,
    pub limit: Option<usize>,
}

pub async fn search(
    config: &Config,
    corpus_path: &Path,
    query: &str,
    options: SearchOptions,
) -> anyhow::Result<()> {
    let corpus = load_corpus(corpus_path, &FrenchPreprocessor).await?;
    let ranker = SearchRanker::new(FrenchMorphology::new(), &config.search);

    let results = ranker.perform_search(&corpus, query, options.question_type, options.level);
    match options.level {
        Some(level) => println!(
            "{} results for '{}' at {}",
            results.len(),
            query,
            level.description()
        ),
        None => println!("{} results for '{}'", results.len(), query),
    }

    let limit = options.limit.unwrap_or(results.len());
    for record in results.into_iter().take(limit) {
        let content = if options.highlight {
            render_segments(&highlight_text(ranker.morphology(), &record.content, query))
        } else {
            record.content.clone()
        };
        println!("{}  {}", describe(record), content);

        if let Some(choices) = &record.choices {
            let choices = if options.highlight {
                render_segments(&highlight_text(ranker.morphology(), choices, query))
            } else {
                choices.clone()
            };
            println!("    {}", choices);
        }
    }

    Ok(())
}

pub fn word(word: &str) -> anyhow::Result<()> {
    let morphology = FrenchMorphology::new();

    println!("base form:  {}", morphology.base_form(word));
    match morphology.word_info(word) {
        Some(info) => println!("{}", serde_json::to_string_pretty(&info)?),
        None => println!("not a valid French word"),
    }

    let variations: Vec<String> = morphology.variations(word).into_iter().collect();
    println!("variations: {}", variations.join(", "));
    println!("related:    {}", morphology.related_words(word).join(", "));

    let lexicon = morphology.lexicon();
    println!(
        "lexicon:    {} irregular verbs, {} nouns, {} adjectives, {} expressions",
        lexicon.verb_count(),
        lexicon.noun_count(),
        lexicon.adjective_count(),
        lexicon.expression_count()
    );
    Ok(())
}

pub async fn index(config: &Config, corpus_path: &Path) -> anyhow::Result<()> {
    let corpus = load_corpus(corpus_path, &FrenchPreprocessor).await?;
    let vocabulary = open_vocabulary(config).await;
    let processor = FrenchProcessor::new();

    let texts: Vec<String> = corpus
        .iter()
        .map(|record| format!("{} {}", record.content, record.choices_text()))
        .collect();
    let counted = vocabulary
        .index_texts(texts.iter().map(String::as_str), &processor)
        .await?;

    println!(
        "Indexed {} words from {} questions ({} distinct)",
        counted,
        corpus.len(),
        vocabulary.len().await
    );
    Ok(())
}

pub async fn rate(config: &Config, word: &str, stars: u8) -> anyhow::Result<()> {
    let vocabulary = open_vocabulary(config).await;
    let rating = vocabulary.set_stars(word, stars).await?;
    println!(
        "{}: {} stars ({} occurrences)",
        word.trim().to_lowercase(),
        rating.stars,
        rating.occurrences
    );
    Ok(())
}

pub async fn export(
    config: &Config,
    format: ExportFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let vocabulary = open_vocabulary(config).await;
    let data = match format {
        ExportFormat::Csv => vocabulary.export_csv().await,
        ExportFormat::Json => vocabulary.export_json().await?,
    };

    match output {
        Some(path) => {
            tokio::fs::write(path, data).await?;
            tracing::info!("Exported vocabulary to {}", path.display());
        }
        None => println!("{data}"),
    }
    Ok(())
}

pub async fn stats(corpus_path: &Path) -> anyhow::Result<()> {
    let corpus = load_corpus(corpus_path, &FrenchPreprocessor).await?;
    println!("{}", CorpusStats::from_records(&corpus));
    Ok(())
}

async fn open_vocabulary(config: &Config) -> VocabularyStore<JsonFileStore> {
    VocabularyStore::open(JsonFileStore::new(&config.vocabulary.path)).await
}

fn describe(record: &QuestionRecord) -> String {
    let mut label = format!(
        "[{} {} {}]",
        record.id,
        record.question_type.as_str(),
        record.level.as_str()
    );
    if !record.test_num.is_empty() {
        label.push_str(&format!(" test {}", record.test_num));
    }
    if !record.question_num.is_empty() {
        label.push_str(&format!(" q{}", record.question_num));
    }
    label
}

/// Matched segments are wrapped in `[[...]]`
pub fn render_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => text.clone(),
            Segment::Matched(text) => format!("[[{text}]]"),
        })
        .collect()
}
