use std::time::Duration;

use eframe::{egui, Frame};
use egui::{Color32, Context};
use log::{error, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

use reqwest::blocking::Client;

use rs_nlp_core::analysis::entities::Entity;
use rs_nlp_core::analysis::ngram::NGramOrder;
use rs_nlp_core::analysis::stats::TextStats;
use rs_nlp_core::config::{DEFAULT_PREVIEW_LENGTH, DEFAULT_PORT, MAX_PREVIEW_LENGTH};
use rs_nlp_core::report::{
    AnalysisReport, ErrorReport, NGramRecord, PosReport, PreviewReport, ReportStatus, SentimentReport,
};

const GUIDELINES: &str = "Enter text manually or parse it from a web page, then choose the \
analyses to run. Repeating n-grams are sequences of one, two or three words that appear at \
least twice.";

const ABOUT: &str = "rs-nlp is a small text doctor. It finds repeating word sequences, counts \
part-of-speech tags, extracts named entities and scores the sentiment of a text. Web pages are \
reduced to the text of their paragraphs.";

/// Where the analysed text comes from.
#[derive(Debug, PartialEq, Clone, Copy)]
enum TextSource {
    Manual,
    Url,
}

/// A message shown under an analysis, coloured by severity.
#[derive(Debug, Clone)]
enum Notice {
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
}

impl Notice {
    fn show(&self, ui: &mut egui::Ui) {
        let (colour, text) = match self {
            Notice::Success(text) => (Color32::from_rgb(60, 160, 90), text),
            Notice::Info(text) => (Color32::from_rgb(70, 130, 200), text),
            Notice::Warning(text) => (Color32::from_rgb(210, 150, 40), text),
            Notice::Error(text) => (Color32::from_rgb(200, 60, 60), text),
        };
        ui.colored_label(colour, text);
    }
}

/// Result of one analysis as displayed: the data when there is some, or a notice.
enum Panel<T> {
    Data(T, Option<Notice>),
    Notice(Notice),
}

impl<T> Panel<T> {
    /// Turns a server answer into something to display.
    ///
    /// Absent input is a warning, an empty result is informational.
    fn from_answer(answer: Result<AnalysisReport<T>, String>) -> Self {
        match answer {
            Ok(report) => match (report.status, report.data) {
                (ReportStatus::Ok, Some(data)) => Panel::Data(data, report.message.map(Notice::Success)),
                (ReportStatus::NoInput, _) => {
                    Panel::Notice(Notice::Warning(report.message.unwrap_or_default()))
                }
                (_, _) => Panel::Notice(Notice::Info(report.message.unwrap_or_default())),
            },
            Err(e) => Panel::Notice(Notice::Error(e)),
        }
    }
}

/// Input the n-gram view works on.
#[derive(Debug, Clone, PartialEq)]
struct NGramQuery {
    source: TextSource,
    input: String,
    order: NGramOrder,
}

/// Decides when the n-gram view must ask the server again.
///
/// Edits only count once committed (the field lost focus or the source
/// changed), so typing never triggers a request.
struct NGramTracker {
    committed: (TextSource, String),
    last_request: Option<NGramQuery>,
}

impl NGramTracker {
    fn new(source: TextSource, input: &str) -> Self {
        Self { committed: (source, input.to_owned()), last_request: None }
    }

    fn commit(&mut self, source: TextSource, input: &str) {
        self.committed = (source, input.to_owned());
    }

    /// Returns the query to send when the committed input or the order
    /// differs from the last request.
    fn next_request(&mut self, order: NGramOrder) -> Option<NGramQuery> {
        let (source, input) = &self.committed;
        let query = NGramQuery { source: *source, input: input.clone(), order };
        if self.last_request.as_ref() == Some(&query) {
            return None;
        }
        self.last_request = Some(query.clone());
        Some(query)
    }
}

/// Request body understood by every analysis endpoint.
#[derive(Serialize)]
struct AnalysisBody<'a> {
    text: Option<&'a str>,
    url: Option<&'a str>,
}

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
    base_url: String,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    fn new(base_url: String) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(30, 0))
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Sends a POST request to `path` and decodes the report envelope.
    ///
    /// Error responses carry `{"error": ...}`, which becomes the error message.
    fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &AnalysisBody,
    ) -> Result<AnalysisReport<T>, String> {
        let response = self.client
            .post(format!("{}{}", self.base_url, path))
            .query(query)
            .json(body)
            .send()
            .map_err(|e| format!("Server unreachable: {e}"))?;

        if response.status().is_success() {
            response.json().map_err(|e| format!("Unexpected answer: {e}"))
        } else {
            let status = response.status();
            match response.json::<ErrorReport>() {
                Ok(report) => Err(report.error),
                Err(_) => Err(format!("Request failed with status {status}")),
            }
        }
    }
}

/// Global UI state (MUST persist between frames in egui).
struct DoctorUI {
    rest: RESTContext,

    source: TextSource,
    manual_text: String,
    url: String,

    stats: Option<Panel<TextStats>>,
    preview_length: usize,
    preview: Option<Panel<PreviewReport>>,

    show_ngrams: bool,
    ngram_order: NGramOrder,
    ngrams: Option<Panel<Vec<NGramRecord>>>,
    ngram_tracker: NGramTracker,

    pos: Option<Panel<PosReport>>,
    entities: Option<Panel<Vec<Entity>>>,
    sentiment: Option<Panel<SentimentReport>>,
}

impl DoctorUI {
    fn new(base_url: String) -> reqwest::Result<Self> {
        Ok(Self {
            rest: RESTContext::new(base_url)?,

            source: TextSource::Manual,
            manual_text: String::new(),
            url: String::new(),

            stats: None,
            preview_length: DEFAULT_PREVIEW_LENGTH,
            preview: None,

            show_ngrams: false,
            ngram_order: NGramOrder::Bigram,
            ngrams: None,
            ngram_tracker: NGramTracker::new(TextSource::Manual, ""),

            pos: None,
            entities: None,
            sentiment: None,
        })
    }

    /// Body for the current text source. The other field stays empty.
    fn body(&self) -> AnalysisBody<'_> {
        match self.source {
            TextSource::Manual => AnalysisBody { text: Some(&self.manual_text), url: None },
            TextSource::Url => AnalysisBody { text: None, url: Some(&self.url) },
        }
    }

    fn current_input(&self) -> &str {
        match self.source {
            TextSource::Manual => &self.manual_text,
            TextSource::Url => &self.url,
        }
    }

    fn analyse<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Panel<T> {
        self.analyse_body(path, query, &self.body())
    }

    fn analyse_body<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &AnalysisBody,
    ) -> Panel<T> {
        info!("Requesting {path}");
        let answer = self.rest.post(path, query, body);
        if let Err(e) = &answer {
            error!("{path} failed: {e}");
        }
        Panel::from_answer(answer)
    }

    fn commit_input(&mut self) {
        let input = self.current_input().to_owned();
        self.ngram_tracker.commit(self.source, &input);
    }

    /// Performs the n-gram request when the committed input or the order changed.
    fn refresh_ngrams(&mut self) {
        let Some(query) = self.ngram_tracker.next_request(self.ngram_order) else {
            return;
        };
        let body = match query.source {
            TextSource::Manual => AnalysisBody { text: Some(&query.input), url: None },
            TextSource::Url => AnalysisBody { text: None, url: Some(&query.input) },
        };
        let order = [("order", query.order.size().to_string())];
        self.ngrams = Some(self.analyse_body("/v1/ngrams", &order, &body));
    }

    /// Text source and input field. Leaving the field commits its content.
    fn source_ui(&mut self, ui: &mut egui::Ui) {
        let previous_source = self.source;
        ui.horizontal(|ui| {
            ui.label("Text source:");
            ui.radio_value(&mut self.source, TextSource::Manual, "Manual Input");
            ui.radio_value(&mut self.source, TextSource::Url, "Parse from URL");
        });

        let response = match self.source {
            TextSource::Manual => ui.add(
                egui::TextEdit::multiline(&mut self.manual_text)
                    .hint_text("Enter your text here")
                    .desired_rows(8)
                    .desired_width(f32::INFINITY),
            ),
            TextSource::Url => ui.add(
                egui::TextEdit::singleline(&mut self.url)
                    .hint_text("https://...")
                    .desired_width(f32::INFINITY),
            ),
        };
        if response.lost_focus() || self.source != previous_source {
            self.commit_input();
        }

        if self.source == TextSource::Url {
            self.url_tools_ui(ui);
        }
    }

    /// Word counts and preview, only offered for pages.
    fn url_tools_ui(&mut self, ui: &mut egui::Ui) {
        if ui.button("Analyse Text from URL").clicked() {
            self.stats = Some(self.analyse("/v1/stats", &[]));
        }
        if let Some(panel) = &self.stats {
            match panel {
                Panel::Data(_, Some(notice)) => notice.show(ui),
                Panel::Data(stats, None) => {
                    ui.label(stats.summary());
                }
                Panel::Notice(notice) => notice.show(ui),
            }
        }

        ui.horizontal(|ui| {
            ui.add(
                egui::Slider::new(&mut self.preview_length, 0..=MAX_PREVIEW_LENGTH)
                    .text("Preview length (words)"),
            );
            if ui.button("Extract Preview").clicked() {
                let length = [("length", self.preview_length.to_string())];
                self.preview = Some(self.analyse("/v1/preview", &length));
            }
        });
        if let Some(panel) = &self.preview {
            match panel {
                Panel::Data(report, _) => {
                    ui.label(format!("{}...", report.preview));
                }
                Panel::Notice(notice) => notice.show(ui),
            }
        }
    }

    fn ngrams_ui(&mut self, ui: &mut egui::Ui) {
        ui.checkbox(&mut self.show_ngrams, "Show Repeating Ngrams");
        if !self.show_ngrams {
            return;
        }
        ui.small("Updated when you leave the text field.");

        ui.horizontal(|ui| {
            for order in NGramOrder::ALL {
                ui.radio_value(&mut self.ngram_order, order, order.label());
            }
        });
        self.refresh_ngrams();

        match &self.ngrams {
            Some(Panel::Data(records, _)) => {
                egui::Grid::new("ngram_grid")
                    .num_columns(2)
                    .spacing([20.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("Occurrences");
                        ui.strong("Successive tokens");
                        ui.end_row();
                        for record in records {
                            ui.label(record.occurrences.to_string());
                            ui.label(record.succesive_tokens.join(" "));
                            ui.end_row();
                        }
                    });
            }
            Some(Panel::Notice(notice)) => notice.show(ui),
            None => {}
        }
    }

    fn pos_ui(&mut self, ui: &mut egui::Ui) {
        if ui.button("Plot POS Tags Frequency").clicked() {
            self.pos = Some(self.analyse("/v1/pos", &[]));
        }
        match &self.pos {
            Some(Panel::Data(report, notice)) => {
                if let Some(notice) = notice {
                    notice.show(ui);
                }
                for share in &report.tags {
                    ui.horizontal(|ui| {
                        ui.add_sized([60.0, 18.0], egui::Label::new(share.tag.as_str()));
                        ui.add(
                            egui::ProgressBar::new((share.share / 100.0) as f32)
                                .text(format!("{} ({:.1}%)", share.count, share.share)),
                        );
                    });
                }
            }
            Some(Panel::Notice(notice)) => notice.show(ui),
            None => {}
        }
    }

    fn entities_ui(&mut self, ui: &mut egui::Ui) {
        if ui.button("Extract Named Entities").clicked() {
            self.entities = Some(self.analyse("/v1/entities", &[]));
        }
        match &self.entities {
            Some(Panel::Data(entities, _)) => {
                egui::Grid::new("entity_grid")
                    .num_columns(2)
                    .spacing([20.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        for entity in entities {
                            ui.label(&entity.text);
                            ui.label(entity.label.to_string());
                            ui.end_row();
                        }
                    });
            }
            Some(Panel::Notice(notice)) => notice.show(ui),
            None => {}
        }
    }

    fn sentiment_ui(&mut self, ui: &mut egui::Ui) {
        if ui.button("Perform Sentiment Analysis").clicked() {
            self.sentiment = Some(self.analyse("/v1/sentiment", &[]));
        }
        match &self.sentiment {
            Some(Panel::Data(report, _)) => {
                ui.label(&report.summary);
            }
            Some(Panel::Notice(notice)) => notice.show(ui),
            None => {}
        }
    }
}

impl eframe::App for DoctorUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::SidePanel::right("about_panel")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.heading("About");
                ui.label(ABOUT);
                ui.separator();
                ui.small(format!("Server: {}", self.rest.base_url));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("rs-nlp: NLP Web App");
                ui.label(GUIDELINES);
                ui.separator();

                self.source_ui(ui);
                ui.separator();

                self.ngrams_ui(ui);
                ui.separator();

                self.pos_ui(ui);
                ui.separator();

                self.entities_ui(ui);
                ui.separator();

                self.sentiment_ui(ui);
            });
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let base_url = std::env::var("RS_NLP_SERVER")
        .unwrap_or_else(|_| format!("http://127.0.0.1:{DEFAULT_PORT}"));
    let base_url = base_url.trim_end_matches('/').to_owned();
    info!("Using server {base_url}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "rs-nlp",
        options,
        Box::new(|_| Ok(Box::new(DoctorUI::new(base_url)?))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_is_requested_until_input_is_committed() {
        let mut tracker = NGramTracker::new(TextSource::Manual, "");
        assert!(tracker.next_request(NGramOrder::Bigram).is_some());
        assert_eq!(tracker.next_request(NGramOrder::Bigram), None);

        tracker.commit(TextSource::Manual, "a a a");
        let query = tracker.next_request(NGramOrder::Bigram).unwrap();
        assert_eq!(query.input, "a a a");
        assert_eq!(tracker.next_request(NGramOrder::Bigram), None);
    }

    #[test]
    fn recommitting_the_same_input_does_not_refetch() {
        let mut tracker = NGramTracker::new(TextSource::Url, "http://example.com");
        assert!(tracker.next_request(NGramOrder::Unigram).is_some());
        tracker.commit(TextSource::Url, "http://example.com");
        assert_eq!(tracker.next_request(NGramOrder::Unigram), None);
    }

    #[test]
    fn order_or_source_change_refetches() {
        let mut tracker = NGramTracker::new(TextSource::Manual, "a a");
        assert!(tracker.next_request(NGramOrder::Bigram).is_some());
        assert_eq!(tracker.next_request(NGramOrder::Trigram).map(|query| query.order), Some(NGramOrder::Trigram));

        tracker.commit(TextSource::Url, "a a");
        assert_eq!(tracker.next_request(NGramOrder::Trigram).map(|query| query.source), Some(TextSource::Url));
    }
}
