//! Generic admin screen engine.
//!
//! One implementation of the list / search / paginate / create / edit /
//! delete workflow, instantiated per entity type instead of hand-copied
//! per admin page. All user-facing wording is fixed client-side; server
//! error bodies are never surfaced.

use std::time::{Duration, Instant};

use crate::client::ResourceApi;
use crate::domain::Resource;
use crate::forms::{EntityForm, FormError};
use crate::pagination::{Paginated, Pager};
use crate::services::ServiceResult;
use crate::services::deletion::{DeleteFlow, DeleteState};
use crate::services::listing::ListState;
use crate::services::notify::Notifier;
use crate::services::search::{DEFAULT_DEBOUNCE, SearchDebouncer, SearchTicket};

/// Per-screen tuning knobs.
#[derive(Clone, Copy, Debug)]
pub struct ScreenOptions {
    pub page_size: usize,
    pub search_debounce: Duration,
    pub max_image_bytes: usize,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            page_size: crate::DEFAULT_PAGE_SIZE,
            search_debounce: DEFAULT_DEBOUNCE,
            max_image_bytes: crate::MAX_IMAGE_BYTES,
        }
    }
}

/// The CRUD engine behind one admin list screen.
///
/// Owns the authoritative in-memory collection; forms own only their
/// draft until a submission succeeds. Each mutation is all-or-nothing
/// from the operator's perspective and reported through the notification
/// queue.
pub struct AdminScreen<T: Resource, A: ResourceApi<T>> {
    api: A,
    list: ListState<T>,
    pager: Pager,
    search: SearchDebouncer,
    delete: DeleteFlow<T>,
    notifier: Notifier,
    max_image_bytes: usize,
}

impl<T: Resource, A: ResourceApi<T>> AdminScreen<T, A> {
    pub fn new(api: A, options: ScreenOptions) -> Self {
        Self {
            api,
            list: ListState::new(),
            pager: Pager::new(options.page_size),
            search: SearchDebouncer::new(options.search_debounce),
            delete: DeleteFlow::new(),
            notifier: Notifier::new(),
            max_image_bytes: options.max_image_bytes,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // ----- listing & pagination -------------------------------------

    /// Fetches the base collection from the server.
    pub async fn refresh(&mut self) -> ServiceResult<()> {
        match self.api.list().await {
            Ok(items) => {
                self.list.set_base(items);
                Ok(())
            }
            Err(err) => {
                log::error!("failed to load {}: {err}", T::PATH);
                self.notifier
                    .error("Erreur lors du chargement des données.", Instant::now());
                Err(err.into())
            }
        }
    }

    pub fn items(&self) -> &[T] {
        self.list.items()
    }

    pub fn page(&self) -> usize {
        self.pager.page()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.list.len())
    }

    /// Clamped page navigation; out-of-range input lands on the nearest
    /// valid page.
    pub fn go_to_page(&mut self, page: usize) {
        self.pager.go_to_page(page, self.list.len());
    }

    /// Items of the current page. Empty when the collection shrank below
    /// the cursor; the page index is deliberately not auto-corrected.
    pub fn page_items(&self) -> &[T] {
        self.pager.slice(self.list.items())
    }

    /// View model for the current page, with the pager window.
    pub fn page_view(&self) -> Paginated<T> {
        Paginated::new(
            self.page_items().to_vec(),
            self.pager.page(),
            self.total_pages(),
        )
    }

    // ----- search ---------------------------------------------------

    /// Records a keystroke in the search box. The returned ticket is
    /// what [`AdminScreen::run_search`] needs; issuing a newer ticket
    /// invalidates this one.
    pub fn search_input(&mut self, query: &str) -> SearchTicket {
        self.search.input(query, Instant::now())
    }

    /// Waits out the debounce window, then runs the search, unless a
    /// newer keystroke arrived in the meantime. A blank query restores
    /// the cached base collection without touching the network. Stale
    /// responses are discarded rather than applied out of order.
    pub async fn run_search(&mut self, ticket: SearchTicket) -> ServiceResult<()> {
        tokio::time::sleep(self.search.debounce()).await;
        if !self.search.is_current(&ticket) {
            return Ok(());
        }

        if ticket.query().is_empty() {
            self.list.clear_search();
            return Ok(());
        }

        match self.api.search(ticket.query()).await {
            Ok(items) => {
                if self.search.is_current(&ticket) {
                    // Zero matches is a legitimate empty result, not an
                    // error.
                    self.list.set_search_results(items);
                }
                Ok(())
            }
            Err(err) => {
                if self.search.is_current(&ticket) {
                    log::error!("search on {} failed: {err}", T::PATH);
                    self.list.set_search_results(Vec::new());
                    self.notifier
                        .error("Erreur lors de la recherche.", Instant::now());
                }
                Err(err.into())
            }
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.list.is_filtered()
    }

    // ----- create / edit --------------------------------------------

    /// Validates the draft, builds the multipart payload and submits it:
    /// create when `id` is `None`, update otherwise. On success the base
    /// collection is refetched; on failure the caller keeps the draft
    /// and the form stays open.
    pub async fn submit<F: EntityForm>(&mut self, id: Option<i64>, form: F) -> ServiceResult<()> {
        let payload = match form.into_payload(self.max_image_bytes) {
            Ok(payload) => payload,
            Err(err) => {
                // Rejected client-side, before any network call.
                log::warn!("{} form rejected: {err}", T::NOUN);
                let message = match &err {
                    FormError::ImageTooLarge { limit, .. } => {
                        format!(
                            "L'image ne doit pas dépasser {} Mo.",
                            limit / (1024 * 1024)
                        )
                    }
                    FormError::Invalid(_) => {
                        "Veuillez vérifier les champs du formulaire.".to_string()
                    }
                };
                self.notifier.error(message, Instant::now());
                return Err(err.into());
            }
        };

        let result = match id {
            Some(id) => self.api.update(id, payload).await,
            None => self.api.create(payload).await,
        };

        match result {
            Ok(_) => {
                self.notifier
                    .success("Enregistrement effectué.", Instant::now());
                self.refresh().await
            }
            Err(err) => {
                log::error!("failed to save {}: {err}", T::NOUN);
                self.notifier
                    .error("Erreur lors de l'enregistrement.", Instant::now());
                Err(err.into())
            }
        }
    }

    // ----- deletion -------------------------------------------------

    /// Opens the confirmation dialog for this entity.
    pub fn request_delete(&mut self, entity: T) {
        self.delete.request(entity);
    }

    /// Backs out of a pending confirmation.
    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
    }

    pub fn delete_state(&self) -> &DeleteState<T> {
        self.delete.state()
    }

    /// Runs the confirmed delete. On success the entity leaves the
    /// in-memory collection immediately, independent of any future
    /// refetch; on failure the row stays visible and the flow returns to
    /// idle.
    pub async fn confirm_delete(&mut self) -> ServiceResult<()> {
        let Some(id) = self.delete.begin() else {
            return Ok(());
        };

        match self.api.delete(id).await {
            Ok(()) => {
                if let Some(id) = self.delete.settle(true) {
                    self.list.remove(id);
                }
                self.notifier
                    .success("Suppression effectuée.", Instant::now());
                Ok(())
            }
            Err(err) => {
                log::error!("failed to delete {} {id}: {err}", T::NOUN);
                self.delete.settle(false);
                self.notifier
                    .error("La suppression a échoué.", Instant::now());
                Err(err.into())
            }
        }
    }

    // ----- notifications --------------------------------------------

    pub fn notifications(&self) -> &Notifier {
        &self.notifier
    }

    /// Expires notifications older than their display window.
    pub fn sweep_notifications(&mut self, now: Instant) {
        self.notifier.sweep(now);
    }
}
