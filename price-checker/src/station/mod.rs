//! Terminal station
//!
//! Line-oriented front-end. A keyboard-wedge scanner types the digits and
//! Enter, so scanned and typed barcodes arrive the same way on stdin.
//!
//! Lookups run while input keeps being read; scanning a new barcode makes
//! the pending lookup stale. Every interaction runs inside an error boundary
//! that shows a generic notice and resets the session on unexpected
//! failures, panics included.

mod form;
mod render;

pub use form::{Field, RegistrationForm};
pub use render::{category_list, format_price, product_card, product_list};

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Lines};

use crate::core::AppState;
use crate::pipeline::Resolved;
use crate::session::{LookupOutcome, LookupTicket, ScanSession, SessionView};
use crate::utils::{AppError, AppResult, ErrorCategory, panic_message};

pub const FAILURE_NOTICE: &str = "Something went wrong. Press Enter to start over.";

const SCAN_PROMPT: &str = "Scan or type a barcode ('help' for commands):";

const HELP: &str = "\
Commands:
  <barcode>          look up a product
  categories         list categories
  category <id>      list products in a category
  help               show this help
  quit               leave the station
While registering, type :cancel to abandon the form.";

type LookupResult = std::thread::Result<Option<Resolved>>;

struct PendingLookup {
    ticket: LookupTicket,
    future: BoxFuture<'static, LookupResult>,
}

enum Flow {
    Continue,
    Lookup(PendingLookup),
    Quit,
}

enum Event {
    Line(Option<String>),
    Resolved(LookupTicket, LookupResult),
}

pub struct Station<R, W> {
    state: AppState,
    session: ScanSession,
    input: Lines<BufReader<R>>,
    output: W,
    form: Option<RegistrationForm>,
    awaiting_restart: bool,
}

impl<R, W> Station<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(state: AppState, input: R, output: W) -> Self {
        Self {
            state,
            session: ScanSession::new(),
            input: BufReader::new(input).lines(),
            output,
            form: None,
            awaiting_restart: false,
        }
    }

    pub fn session(&self) -> &ScanSession {
        &self.session
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until `quit` or end of input.
    ///
    /// Only I/O failures on the terminal itself end the loop with an error.
    pub async fn run(&mut self) -> std::io::Result<()> {
        self.write(SCAN_PROMPT).await?;
        let mut pending: Option<PendingLookup> = None;

        loop {
            let event = match pending.as_mut() {
                Some(lookup) => {
                    let ticket = lookup.ticket;
                    tokio::select! {
                        biased;
                        result = &mut lookup.future => Event::Resolved(ticket, result),
                        line = self.input.next_line() => Event::Line(line?),
                    }
                }
                None => Event::Line(self.input.next_line().await?),
            };

            let flow = match event {
                Event::Resolved(ticket, result) => {
                    pending = None;
                    let outcome = self.finish_lookup(ticket, result).await;
                    self.settle(outcome).await?
                }
                Event::Line(None) => {
                    // End of input: let the last lookup finish before leaving
                    if let Some(lookup) = pending.take() {
                        let result = lookup.future.await;
                        let outcome = self.finish_lookup(lookup.ticket, result).await;
                        self.settle(outcome).await?;
                    }
                    Flow::Quit
                }
                Event::Line(Some(line)) => {
                    let outcome = AssertUnwindSafe(self.handle_line(&line))
                        .catch_unwind()
                        .await;
                    self.settle(outcome).await?
                }
            };

            if self.awaiting_restart {
                pending = None;
            }
            match flow {
                Flow::Continue => {}
                Flow::Lookup(lookup) => pending = Some(lookup),
                Flow::Quit => break,
            }
        }

        self.output.flush().await
    }

    async fn finish_lookup(
        &mut self,
        ticket: LookupTicket,
        result: LookupResult,
    ) -> std::thread::Result<AppResult<Flow>> {
        match result {
            Ok(resolved) => {
                AssertUnwindSafe(self.apply_lookup(ticket, resolved))
                    .catch_unwind()
                    .await
            }
            Err(payload) => Err(payload),
        }
    }

    /// Route the outcome of one interaction: errors the user can act on are
    /// shown inline, anything else hits the boundary
    async fn settle(
        &mut self,
        outcome: std::thread::Result<AppResult<Flow>>,
    ) -> std::io::Result<Flow> {
        match outcome {
            Ok(Ok(flow)) => return Ok(flow),
            Ok(Err(err)) if !matches!(err.code.category(), ErrorCategory::System) => {
                self.write(&err.message).await?;
            }
            Ok(Err(err)) => self.boundary(err).await?,
            Err(payload) => {
                let err = AppError::internal(format!(
                    "Station panicked: {}",
                    panic_message(payload.as_ref())
                ));
                self.boundary(err).await?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Top-level error boundary: generic notice, then a fresh session once
    /// the user presses Enter
    async fn boundary(&mut self, err: AppError) -> std::io::Result<()> {
        tracing::error!(code = %err.code, error = %err.message, "Station interaction failed");
        self.session.reset();
        self.form = None;
        self.awaiting_restart = true;
        self.write(FAILURE_NOTICE).await
    }

    async fn handle_line(&mut self, line: &str) -> AppResult<Flow> {
        let input = line.trim();

        if self.awaiting_restart {
            self.awaiting_restart = false;
            self.say(SCAN_PROMPT).await?;
            return Ok(Flow::Continue);
        }

        if self.form.is_some() {
            self.fill_form(input).await?;
            return Ok(Flow::Continue);
        }

        match input {
            "" => Err(AppError::invalid_barcode()),
            "quit" | "exit" => Ok(Flow::Quit),
            "help" => {
                self.say(HELP).await?;
                Ok(Flow::Continue)
            }
            "category" => {
                self.say("Usage: category <id> (see 'categories' for ids)").await?;
                Ok(Flow::Continue)
            }
            "categories" => {
                let listing = category_list(self.state.catalog.categories());
                self.say(listing.trim_end()).await?;
                Ok(Flow::Continue)
            }
            _ => {
                if let Some(id) = input.strip_prefix("category ") {
                    let products = self.state.catalog.products_in_category(id.trim())?;
                    if products.is_empty() {
                        self.say("No products in this category.").await?;
                    } else {
                        self.say(product_list(&products).trim_end()).await?;
                    }
                    return Ok(Flow::Continue);
                }
                Ok(Flow::Lookup(self.begin_lookup(input).await?))
            }
        }
    }

    async fn begin_lookup(&mut self, barcode: &str) -> AppResult<PendingLookup> {
        let ticket = self.session.begin_lookup(barcode);
        self.say(&format!("Looking up {}...", barcode)).await?;

        let pipeline = self.state.pipeline.clone();
        let barcode = barcode.to_string();
        let future = AssertUnwindSafe(async move { pipeline.resolve_barcode(&barcode).await })
            .catch_unwind()
            .boxed();
        Ok(PendingLookup { ticket, future })
    }

    async fn apply_lookup(
        &mut self,
        ticket: LookupTicket,
        resolved: Option<Resolved>,
    ) -> AppResult<Flow> {
        let source = resolved.as_ref().map(|r| r.source);
        match self
            .session
            .complete_lookup(ticket, resolved.map(|r| r.product))
        {
            LookupOutcome::Found => {
                if let SessionView::Viewing(product) = self.session.view() {
                    let card = product_card(product, source);
                    self.say(card.trim_end()).await?;
                }
                self.say(SCAN_PROMPT).await?;
            }
            LookupOutcome::NotFound => {
                let barcode = self.session.registering().unwrap_or_default().to_string();
                self.say(&format!(
                    "Product {} not found. Register it below (* = required).",
                    barcode
                ))
                .await?;
                self.form = Some(RegistrationForm::new(barcode));
                self.prompt_field().await?;
            }
            LookupOutcome::Stale => {
                tracing::debug!("Discarding result of superseded lookup");
            }
        }
        Ok(Flow::Continue)
    }

    async fn fill_form(&mut self, input: &str) -> AppResult<()> {
        if input == ":cancel" {
            self.form = None;
            self.session.reset();
            self.say("Registration cancelled.").await?;
            return self.say(SCAN_PROMPT).await;
        }

        let Some(form) = self.form.as_mut() else {
            return Ok(());
        };
        if let Err(err) = form.answer(input) {
            self.say(&err.message).await?;
            return self.prompt_field().await;
        }
        if !form.is_complete() {
            return self.prompt_field().await;
        }

        let Some(form) = self.form.take() else {
            return Ok(());
        };
        let (barcode, registration) = form.into_parts();
        match self.state.registration.register(&barcode, registration).await {
            Ok(product) => {
                let card = product_card(&product, None);
                self.session.complete_registration(product);
                self.say("Product registered.").await?;
                self.say(card.trim_end()).await?;
                self.say(SCAN_PROMPT).await
            }
            Err(err) if err.is_validation() => {
                // Start the form over; nothing was stored
                self.say(&err.message).await?;
                self.form = Some(RegistrationForm::new(barcode));
                self.prompt_field().await
            }
            Err(err) => Err(err),
        }
    }

    async fn prompt_field(&mut self) -> AppResult<()> {
        let prompt = self
            .form
            .as_ref()
            .and_then(|f| f.current())
            .map(Field::prompt);
        match prompt {
            Some(prompt) => self.say(&format!("{}:", prompt)).await,
            None => Ok(()),
        }
    }

    async fn say(&mut self, text: &str) -> AppResult<()> {
        self.write(text)
            .await
            .map_err(|e| AppError::internal(format!("Terminal write failed: {}", e)))
    }

    async fn write(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }
}
