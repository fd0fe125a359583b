use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::{debug, warn};

use super::debounce::Debouncer;
use super::exchange_errors::ExchangeError;
use super::exchange_model::{ExchangeCommand, ExchangeOrder, ExchangeState};
use super::exchange_service::ExchangeService;
use super::submission::{SimulatedSubmissionHandler, SubmissionHandler};
use crate::errors::Result;
use crate::fx::{Currency, CurrencyConverter, RateTable};
use crate::notifications::{Notification, NotificationSink};
use crate::settings::ExchangeSettings;

/// Which side of the form an input belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Sell,
    Buy,
}

struct SessionInner {
    state: ExchangeState,
    sell_input: String,
    buy_input: String,
    sell_debounce: Debouncer,
    buy_debounce: Debouncer,
    submitting: bool,
    closed: bool,
}

impl SessionInner {
    fn debouncer(&mut self, side: Side) -> &mut Debouncer {
        match side {
            Side::Sell => &mut self.sell_debounce,
            Side::Buy => &mut self.buy_debounce,
        }
    }

    fn cancel_pending(&mut self) {
        self.sell_debounce.cancel();
        self.buy_debounce.cancel();
    }

    /// Mirrors the committed amounts into both input buffers so stale
    /// keystrokes cannot overwrite a programmatic update.
    fn resync_inputs(&mut self) {
        self.sell_input = self.state.sell_amount.clone();
        self.buy_input = self.state.buy_amount.clone();
    }
}

/// A live exchange form session.
///
/// The thin imperative shell around [`ExchangeService`]: it owns the
/// committed state, the per-side pending input buffers, the debounce
/// timers, and the submission gate. Clones are cheap and share the same
/// underlying form.
///
/// Raw keystrokes go through [`ExchangeSession::input_sell_amount`] /
/// [`ExchangeSession::input_buy_amount`] and are committed after a quiet
/// period; everything else commits synchronously. All transitions run to
/// completion before the next one is observed, so there is no partial
/// state to render.
#[derive(Clone)]
pub struct ExchangeSession {
    service: Arc<ExchangeService>,
    submission: Arc<dyn SubmissionHandler>,
    notifications: Arc<dyn NotificationSink>,
    inner: Arc<Mutex<SessionInner>>,
}

impl ExchangeSession {
    pub fn new(
        service: Arc<ExchangeService>,
        submission: Arc<dyn SubmissionHandler>,
        notifications: Arc<dyn NotificationSink>,
        debounce_delay: Duration,
    ) -> Self {
        let state = service.initial_state();
        let inner = SessionInner {
            sell_input: state.sell_amount.clone(),
            buy_input: state.buy_amount.clone(),
            state,
            sell_debounce: Debouncer::new(debounce_delay),
            buy_debounce: Debouncer::new(debounce_delay),
            submitting: false,
            closed: false,
        };

        Self {
            service,
            submission,
            notifications,
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Builds a fully wired session from configuration, with the
    /// simulated submission handler.
    pub fn from_settings(
        settings: &ExchangeSettings,
        notifications: Arc<dyn NotificationSink>,
    ) -> Result<Self> {
        let rates = RateTable::new(&settings.rates)?;
        let converter = CurrencyConverter::new(rates, settings.fee_rate)?;
        let service = ExchangeService::new(
            Arc::new(converter),
            settings.initial_sell_currency,
            settings.initial_buy_currency,
        )?;
        let submission = Arc::new(SimulatedSubmissionHandler::new(settings.submission_delay()));

        Ok(Self::new(
            Arc::new(service),
            submission,
            notifications,
            settings.debounce_delay(),
        ))
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        // A poisoned lock only means a panic elsewhere mid-commit; the
        // state record itself is always left whole.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of the committed exchange state.
    pub fn state(&self) -> ExchangeState {
        self.lock().state.clone()
    }

    /// Raw input text currently shown for a side.
    pub fn input(&self, side: Side) -> String {
        let inner = self.lock();
        match side {
            Side::Sell => inner.sell_input.clone(),
            Side::Buy => inner.buy_input.clone(),
        }
    }

    /// Both pending input buffers, sell side first.
    pub fn pending_inputs(&self) -> (String, String) {
        let inner = self.lock();
        (inner.sell_input.clone(), inner.buy_input.clone())
    }

    pub fn is_submitting(&self) -> bool {
        self.lock().submitting
    }

    /// Whether the submit control should be enabled.
    pub fn is_submittable(&self) -> bool {
        let inner = self.lock();
        inner.state.is_submittable() && !inner.submitting
    }

    /// The indicative sell-to-buy rate for the current pair, fee-free.
    pub fn display_rate(&self) -> String {
        let state = self.state();
        self.service.display_rate(&state)
    }

    /// Buffers a keystroke on the sell side and schedules its commit.
    pub fn input_sell_amount(&self, text: &str) {
        self.input_amount(Side::Sell, text);
    }

    /// Buffers a keystroke on the buy side and schedules its commit.
    pub fn input_buy_amount(&self, text: &str) {
        self.input_amount(Side::Buy, text);
    }

    fn input_amount(&self, side: Side, text: &str) {
        // A lone decimal point becomes "0." and skips the quiet period,
        // so the user sees it take effect immediately.
        let immediate = text == ".";
        let value = if immediate {
            "0.".to_string()
        } else {
            text.to_string()
        };

        let mut inner = self.lock();
        if inner.closed {
            debug!("ignoring input on closed session");
            return;
        }

        match side {
            Side::Sell => inner.sell_input = value.clone(),
            Side::Buy => inner.buy_input = value.clone(),
        }

        if immediate {
            inner.debouncer(side).cancel();
            Self::commit_amount(&self.service, &mut inner, side, value);
            return;
        }

        let service = Arc::clone(&self.service);
        let shared = Arc::clone(&self.inner);
        inner.debouncer(side).schedule(move || {
            let mut inner = shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            if inner.closed {
                return;
            }
            Self::commit_amount(&service, &mut inner, side, value);
        });
    }

    fn commit_amount(
        service: &ExchangeService,
        inner: &mut SessionInner,
        side: Side,
        value: String,
    ) {
        debug!("committing {:?}-side amount input", side);
        let command = match side {
            Side::Sell => ExchangeCommand::SetSellAmount(value),
            Side::Buy => ExchangeCommand::SetBuyAmount(value),
        };
        inner.state = service.transition(&inner.state, command);

        // The edited side keeps its raw text; the derived side mirrors
        // the committed state.
        match side {
            Side::Sell => inner.buy_input = inner.state.buy_amount.clone(),
            Side::Buy => inner.sell_input = inner.state.sell_amount.clone(),
        }
    }

    pub fn set_sell_currency(&self, currency: Currency) {
        self.apply_programmatic(ExchangeCommand::SetSellCurrency(currency));
    }

    pub fn set_buy_currency(&self, currency: Currency) {
        self.apply_programmatic(ExchangeCommand::SetBuyCurrency(currency));
    }

    pub fn swap_currencies(&self) {
        self.apply_programmatic(ExchangeCommand::SwapCurrencies);
    }

    /// Commits a non-typing transition: pending keystroke commits are
    /// cancelled and both input buffers resynchronize to the result.
    fn apply_programmatic(&self, command: ExchangeCommand) {
        let mut inner = self.lock();
        if inner.closed {
            debug!("ignoring {:?} on closed session", command);
            return;
        }
        inner.cancel_pending();
        inner.state = self.service.transition(&inner.state, command);
        inner.resync_inputs();
    }

    /// Runs the submission flow.
    ///
    /// Re-entry while a submission is in flight is rejected, as is an
    /// incomplete form. Whatever the outcome, the form resets to its
    /// initial state once the attempt finishes; only the notification
    /// differs.
    pub async fn submit(&self) -> std::result::Result<(), ExchangeError> {
        let order = {
            let mut inner = self.lock();
            if inner.closed {
                return Err(ExchangeError::SessionClosed);
            }
            if inner.submitting {
                return Err(ExchangeError::SubmissionInProgress);
            }
            if !inner.state.is_submittable() {
                return Err(ExchangeError::IncompleteForm);
            }
            inner.submitting = true;
            ExchangeOrder::from_state(&inner.state)
        };

        self.notifications
            .notify(Notification::info("Processing exchange…"));

        let result = self.submission.execute(&order).await;
        match &result {
            Ok(()) => self.notifications.notify(Notification::success(format!(
                "Success! {} {} to {} {}",
                order.sell_amount, order.sell_currency, order.buy_amount, order.buy_currency
            ))),
            Err(err) => {
                warn!("exchange submission failed: {err}");
                self.notifications.notify(Notification::error("Failed!"));
            }
        }

        let mut inner = self.lock();
        inner.submitting = false;
        if !inner.closed {
            inner.cancel_pending();
            inner.state = self.service.transition(&inner.state, ExchangeCommand::SubmitForm);
            inner.resync_inputs();
        }
        result
    }

    /// Tears the session down: pending debounce commits are cancelled
    /// and further commands are ignored. Dropping the last clone cancels
    /// the timers as well.
    pub fn close(&self) {
        debug!("closing exchange session");
        let mut inner = self.lock();
        inner.closed = true;
        inner.cancel_pending();
    }
}
