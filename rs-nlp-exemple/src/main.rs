use rs_nlp_core::analysis::ngram::{rank_json_tokens, rank_ngrams, NGramOrder};
use rs_nlp_core::analyzer::Analyzer;
use rs_nlp_core::input::{AnalysisState, TextInput};
use rs_nlp_core::io::{self, NamedText};
use rs_nlp_core::report::{no_repeats_message, PosReport};
use rs_nlp_core::web::{extract_paragraphs, is_valid_url};

const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog. The quick brown fox is \
happy, but the lazy dog is not. Barack Obama visited Paris in March 2015 and paid $5 million to \
Acme Corp, about 20% of the budget.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Texts from the "data" directory (.txt files), or a built-in sample
    let texts = match io::load_texts("./data") {
        Ok(texts) if !texts.is_empty() => texts,
        _ => vec![NamedText { name: "sample".to_owned(), text: SAMPLE_TEXT.to_owned() }],
    };

    // The ranker works on any token sequence
    let ranking = rank_ngrams(&["the", "cat", "sat", "the", "cat", "ran"]);
    for (order, ranked) in ranking.iter() {
        println!("{}: {:?}", order.label(), ranked.iter().collect::<Vec<_>>());
    }

    // Untyped tokens are checked, never coerced
    let untyped = serde_json::json!(["a", 1, "b"]);
    match rank_json_tokens(&untyped) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected tokens: {e}"),
    }

    // One analyzer, with a cache of 16 texts
    let mut analyzer = Analyzer::new(16);

    for NamedText { name, text } in &texts {
        println!("\n=== {name} ===");
        let input = TextInput::new(text.as_str());

        if let AnalysisState::Ready(stats) = analyzer.stats(&input) {
            println!("{}", stats.summary());
        }
        if let AnalysisState::Ready(preview) = analyzer.preview(&input, 12)? {
            println!("Preview: {preview}...");
        }

        for order in NGramOrder::ALL {
            match analyzer.ngrams(&input, order) {
                AnalysisState::Ready(ranked) => {
                    println!("{}:", order.label());
                    for entry in ranked.iter() {
                        println!("  {} x {}", entry.count, entry.ngram.join(" "));
                    }
                    if let Some(top) = ranked.most_common() {
                        println!("  most repeated: \"{}\"", top.ngram.join(" "));
                    }
                }
                _ => println!("{}", no_repeats_message(order)),
            }
        }

        if let AnalysisState::Ready(frequency) = analyzer.pos(&input) {
            let report = PosReport::from(&frequency);
            if let Some(summary) = report.summary() {
                println!("{summary}");
            }
            for share in &report.tags {
                println!("  {:<6} {:>4} {:>6.1}%", share.tag.as_str(), share.count, share.share);
            }
        }

        match analyzer.entities(&input) {
            AnalysisState::Ready(entities) => {
                for entity in entities {
                    println!("  {} [{}]", entity.text, entity.label);
                }
            }
            _ => println!("No entities"),
        }

        if let AnalysisState::Ready(sentiment) = analyzer.sentiment(&input) {
            println!("{}", sentiment.summary());
        }
    }

    // Every analysed text is now cached
    println!("\nCached texts: {}", analyzer.cache().len());

    // Blank text is absent input, not an empty result
    match analyzer.ngram_ranking(&TextInput::new("   ")) {
        AnalysisState::NoInput => println!("Blank text: no input"),
        _ => println!("Should not happen"),
    }

    // Page helpers used by the server
    println!("{}", is_valid_url("https://example.com/page"));
    println!("{}", extract_paragraphs("<p>First</p><div>skip</div><p>Second &amp; last</p>"));

    Ok(())
}
