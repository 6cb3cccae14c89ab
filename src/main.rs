use std::time::Duration;

use iced::time::{self, Instant};
use iced::widget::{column, container, image, stack};
use iced::{Element, Length, Subscription, Task, Theme};

// Declare the application modules
mod state;
mod ui;
mod unsplash;

use state::data::ImageRecord;
use state::gallery::ResultList;
use ui::toast::{ToastKind, Toasts};
use unsplash::models::SearchResponse;
use unsplash::{UnsplashClient, UnsplashError};

/// Environment variable holding the Unsplash access key
const ACCESS_KEY_VAR: &str = "UNSPLASH_ACCESS_KEY";

/// How often expired toasts are swept while any are on screen
const TOAST_SWEEP_INTERVAL: Duration = Duration::from_millis(500);

/// Main application state
struct Gallery {
    /// The injected Unsplash gateway
    client: UnsplashClient,
    /// Current contents of the search input
    term: String,
    /// The working set of results for the last search
    images: ResultList,
    /// True strictly while a search is in flight
    loading: bool,
    /// Generation counter for searches. Only a settlement carrying the
    /// newest generation is applied; anything older is discarded, so a
    /// slow response can never overwrite a newer one.
    search_seq: u64,
    /// Transient notification stack
    toasts: Toasts,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User edited the search input
    SearchTermChanged(String),
    /// User submitted the search (Enter or the Search button)
    SearchSubmitted,
    /// A search request settled, one way or the other
    SearchFinished {
        seq: u64,
        term: String,
        outcome: Result<SearchResponse, UnsplashError>,
    },
    /// Thumbnail bytes arrived for one result
    ThumbnailFetched {
        id: String,
        result: Result<Vec<u8>, UnsplashError>,
    },
    /// User clicked Save on a card
    SaveImage(String),
    /// User clicked Delete on a card
    DeleteImage(String),
    /// Periodic sweep of expired toasts
    Tick(Instant),
}

impl Gallery {
    /// Create a new instance of the application
    fn new(client: UnsplashClient) -> (Self, Task<Message>) {
        println!("🖼️  Images Gallery ready");

        (
            Gallery {
                client,
                term: String::new(),
                images: ResultList::new(),
                loading: false,
                search_seq: 0,
                toasts: Toasts::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchTermChanged(term) => {
                self.term = term;
                Task::none()
            }

            Message::SearchSubmitted => {
                // Exact empty check, no trimming: a term of spaces is a search
                if self.term.is_empty() {
                    self.toasts
                        .push(ToastKind::Warning, "Please enter a search term");
                    return Task::none();
                }

                self.loading = true;
                self.search_seq += 1;

                let seq = self.search_seq;
                let term = self.term.clone();
                let client = self.client.clone();

                println!("🔍 Searching for \"{}\"", term);

                Task::perform(
                    async move {
                        let outcome = client.search_photos(&term).await;
                        (seq, term, outcome)
                    },
                    |(seq, term, outcome)| Message::SearchFinished { seq, term, outcome },
                )
            }

            Message::SearchFinished { seq, term, outcome } => {
                if seq != self.search_seq {
                    // A newer search has been dispatched since; this
                    // settlement belongs to it, not us
                    println!("⏭️  Dropping stale response for \"{}\"", term);
                    return Task::none();
                }

                let mut follow_up = Task::none();

                match outcome {
                    Ok(response) if response.results.is_empty() => {
                        // The previous results stay on screen
                        self.toasts.push(ToastKind::Info, "No images found.");
                    }
                    Ok(response) => {
                        let records: Vec<ImageRecord> =
                            response.results.into_iter().map(ImageRecord::from).collect();
                        self.images.replace(records);

                        let count = self.images.len();
                        println!("✅ {} results for \"{}\"", count, term);
                        self.toasts.push(
                            ToastKind::Success,
                            format!("Found {} images for \"{}\"", count, term),
                        );

                        follow_up = self.fetch_thumbnails();
                    }
                    Err(error) => {
                        eprintln!("❌ Search failed: {}", error);
                        self.toasts.push(
                            ToastKind::Error,
                            "Failed to fetch images. Check your access key.",
                        );
                    }
                }

                // Input and loading flag reset only after the branch resolved
                self.term.clear();
                self.loading = false;

                follow_up
            }

            Message::ThumbnailFetched { id, result } => {
                match result {
                    Ok(bytes) => {
                        self.images
                            .attach_thumbnail(&id, image::Handle::from_bytes(bytes));
                    }
                    Err(error) => {
                        // The card keeps its placeholder
                        eprintln!("⚠️  Thumbnail for {} failed: {}", id, error);
                    }
                }
                Task::none()
            }

            Message::SaveImage(id) => {
                if let Some(record) = self.images.save(&id) {
                    let label = record.label().to_string();
                    self.toasts
                        .push(ToastKind::Success, format!("Saved \"{}\"", label));
                }
                Task::none()
            }

            Message::DeleteImage(id) => {
                // The notification is unconditional, matching the UI flow
                // even when the id is already gone
                self.images.remove(&id);
                self.toasts.push(ToastKind::Warning, "Image deleted");
                Task::none()
            }

            Message::Tick(now) => {
                self.toasts.sweep(now);
                Task::none()
            }
        }
    }

    /// One background download task per result's small-tier URL
    fn fetch_thumbnails(&self) -> Task<Message> {
        Task::batch(self.images.records().iter().map(|record| {
            let client = self.client.clone();
            let id = record.id.clone();
            let url = record.urls.small.clone();

            Task::perform(
                async move {
                    let result = client.fetch_image_bytes(&url).await;
                    (id, result)
                },
                |(id, result)| Message::ThumbnailFetched { id, result },
            )
        }))
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        // Three-way branch: loading, grid, or welcome
        let body: Element<Message> = if self.loading {
            ui::gallery::spinner()
        } else if !self.images.is_empty() {
            ui::gallery::image_grid(&self.images)
        } else {
            ui::gallery::welcome()
        };

        let page = column![ui::gallery::header(&self.term), body]
            .spacing(16)
            .padding(20);

        stack![
            container(page).width(Length::Fill).height(Length::Fill),
            ui::toast::view(&self.toasts),
        ]
        .into()
    }

    /// Tick only while there are toasts to expire
    fn subscription(&self) -> Subscription<Message> {
        if self.toasts.is_empty() {
            Subscription::none()
        } else {
            time::every(TOAST_SWEEP_INTERVAL).map(Message::Tick)
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    // The credential is read once here and injected into the gateway;
    // nothing else touches the environment. An empty key is not an
    // error until a search actually fails.
    let access_key = std::env::var(ACCESS_KEY_VAR).unwrap_or_default();
    if access_key.is_empty() {
        eprintln!("⚠️  {} is not set; searches will fail until it is", ACCESS_KEY_VAR);
    }

    let client = UnsplashClient::new(access_key);

    iced::application("Images Gallery", Gallery::update, Gallery::view)
        .subscription(Gallery::subscription)
        .theme(Gallery::theme)
        .centered()
        .run_with(move || Gallery::new(client))
}
