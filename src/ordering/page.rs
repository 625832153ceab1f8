use reqwest::Url;
use serde::Serialize;
use serde_json::json;
use tracing::{error, info, warn};

use super::api::{OrderOutcome, OrderingApi};
use super::models::{OrderRequest, SeatStatus, Snack};
use super::normalize::status_class_suffix;
use crate::error::ClientError;
use crate::render::{Region, RenderTarget, Templates};

pub const TITLE: Region = Region("titulo-pedido");
pub const SNACKS: Region = Region("snacks-container");
pub const MY_SEAT: Region = Region("meu-assento-status-container");
pub const STATUS_MESSAGE: Region = Region("mensagem-status");
pub const ORDER_BUTTON: Region = Region("btn-pedir");

/// Query parameter carrying the seat id.
pub const SEAT_PARAM: &str = "assento";

const TEMPLATES: &[(&str, &str)] = &[
    ("title.html", r#"<h1 id="titulo-pedido">{{ text }}</h1>"#),
    (
        "status_message.html",
        r#"<p id="mensagem-status" class="{{ kind }}">{{ text }}</p>"#,
    ),
    (
        "snack_cards.html",
        r#"{% for card in cards %}<div class="snack-card{% if card.selected %} selected{% endif %}" data-snack-id="{{ card.id }}">
    <img src="{{ card.image }}" alt="{{ card.name }}">
    <span>{{ card.name }}</span>
</div>
{% endfor %}"#,
    ),
    ("snacks_error.html", r#"<p class="error">{{ message }}</p>"#),
    (
        "seat_card.html",
        r#"<div class="assento-card status-{{ status_class }}">
    <div class="numero">{{ labels.seat }} {{ seat_id }}</div>
    <div class="status">{{ labels.loyalty }}: <strong>{{ loyalty_status }}</strong></div>
    <div class="pedidos">{{ labels.orders }}: <strong>{{ order_count }}</strong></div>
</div>"#,
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// User actions on the ordering page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderingEvent {
    CardClicked(String),
    OrderClicked,
}

#[derive(Serialize)]
struct SnackCard<'a> {
    id: &'a str,
    name: &'a str,
    image: String,
    selected: bool,
}

/// Reads the seat id from a page URL such as `index.html?assento=4`.
/// Relative URLs are accepted; an empty value counts as absent.
pub fn seat_from_page_url(page_url: &str) -> Option<String> {
    let url = match Url::parse(page_url) {
        Ok(url) => url,
        Err(_) => Url::parse("http://localhost/").ok()?.join(page_url).ok()?,
    };
    url.query_pairs()
        .find(|(key, _)| key == SEAT_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Snack ordering page for one seat.
pub struct OrderingPage<R: RenderTarget> {
    api: OrderingApi,
    target: R,
    templates: Templates,
    seat_id: Option<String>,
    catalog: Vec<(String, Snack)>,
    selected: Option<String>,
    order_enabled: bool,
}

impl<R: RenderTarget> OrderingPage<R> {
    /// Builds the page for `page_url` and renders its heading. Without a seat
    /// id the order button is disabled and an explanation is shown.
    pub fn new(api: OrderingApi, target: R, page_url: &str) -> Result<Self, ClientError> {
        let mut page = Self {
            api,
            target,
            templates: Templates::new(TEMPLATES)?,
            seat_id: seat_from_page_url(page_url),
            catalog: Vec::new(),
            selected: None,
            order_enabled: true,
        };

        match page.seat_id.clone() {
            Some(seat) => {
                page.render_title(&t!("ordering.title", seat = seat))?;
            }
            None => {
                warn!(%page_url, "Page opened without a seat id.");
                page.render_title(&t!("ordering.title_missing_seat"))?;
                page.order_enabled = false;
                page.target.set_enabled(ORDER_BUTTON, false);
                page.show_message(MessageKind::Error, &t!("ordering.open_with_seat"))?;
            }
        }
        Ok(page)
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn into_target(self) -> R {
        self.target
    }

    pub fn seat_id(&self) -> Option<&str> {
        self.seat_id.as_deref()
    }

    pub fn selected_snack(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Page-ready trigger: loads the catalog and the seat card. Both run even
    /// if the first fails; the first error is returned.
    pub async fn init(&mut self) -> Result<(), ClientError> {
        let snacks = self.load_snacks().await;
        let seat = self.load_my_seat().await;
        snacks.and(seat)
    }

    pub async fn handle(&mut self, event: OrderingEvent) -> Result<(), ClientError> {
        match event {
            OrderingEvent::CardClicked(id) => {
                if !self.select_snack(&id)? {
                    warn!(snack_id = %id, "Click on a snack that is not in the catalog.");
                }
                Ok(())
            }
            OrderingEvent::OrderClicked if !self.order_enabled => Ok(()),
            OrderingEvent::OrderClicked => self.submit_order().await,
        }
    }

    /// Fetches the catalog and re-renders every card. Clears the selection,
    /// and on failure the catalog too, since no cards remain on screen.
    pub async fn load_snacks(&mut self) -> Result<(), ClientError> {
        self.selected = None;
        match self.api.snacks().await {
            Ok(catalog) => {
                self.catalog = catalog.sorted();
                info!(count = self.catalog.len(), "Snack catalog loaded.");
                self.render_snacks()
            }
            Err(e) => {
                error!(error = %e, "Failed to load snacks.");
                self.catalog.clear();
                let html = self.templates.render_value(
                    "snacks_error.html",
                    &json!({ "message": t!("ordering.snacks_failed") }),
                )?;
                self.target.replace(SNACKS, html);
                Err(e)
            }
        }
    }

    /// Marks `snack_id` as the single selected card. Returns false, leaving
    /// the selection untouched, when the id is not in the loaded catalog.
    pub fn select_snack(&mut self, snack_id: &str) -> Result<bool, ClientError> {
        if !self.catalog.iter().any(|(id, _)| id == snack_id) {
            return Ok(false);
        }
        self.selected = Some(snack_id.to_string());
        self.render_snacks()?;
        Ok(true)
    }

    /// Renders the card of the current seat. Leaves the region untouched when
    /// there is no seat id or the seat is not in the table.
    pub async fn load_my_seat(&mut self) -> Result<(), ClientError> {
        let Some(seat_id) = self.seat_id.clone() else {
            return Ok(());
        };

        let table = match self.api.seats().await {
            Ok(table) => table,
            Err(e) => {
                warn!(seat_id = %seat_id, error = %e, "Failed to load seat table.");
                return Err(e);
            }
        };

        match table.seats.get(&seat_id) {
            Some(seat) => self.render_seat(&seat_id, seat),
            None => {
                warn!(seat_id = %seat_id, "Seat not present in seat table.");
                Ok(())
            }
        }
    }

    /// Posts the selected snack for this seat. Missing seat or selection is
    /// reported without touching the network.
    pub async fn submit_order(&mut self) -> Result<(), ClientError> {
        let Some(seat_id) = self.seat_id.as_deref().and_then(|s| s.parse::<i64>().ok()) else {
            self.show_message(MessageKind::Error, &t!("ordering.seat_missing"))?;
            return Err(ClientError::SeatNotIdentified);
        };
        let Some(selected) = self.selected.clone() else {
            self.show_message(MessageKind::Error, &t!("ordering.select_snack"))?;
            return Err(ClientError::NoSnackSelected);
        };
        let Ok(snack_id) = selected.parse::<i64>() else {
            self.show_message(MessageKind::Error, &t!("ordering.invalid_snack"))?;
            return Err(ClientError::InvalidSnackId(selected));
        };

        let order = OrderRequest { seat_id, snack_id };
        match self.api.place_order(order).await {
            Ok(OrderOutcome::Accepted { message }) => {
                info!(seat_id, snack_id, "Order accepted.");
                let text = message.unwrap_or_else(|| t!("ordering.order_placed").into_owned());
                self.show_message(MessageKind::Success, &text)?;
                if let Err(e) = self.load_my_seat().await {
                    warn!(error = %e, "Seat card not refreshed after order.");
                }
                Ok(())
            }
            Ok(OrderOutcome::Refused { status, message }) => {
                let text = message.unwrap_or_else(|| t!("ordering.order_failed").into_owned());
                warn!(seat_id, snack_id, status, reason = %text, "Order refused.");
                self.show_message(MessageKind::Error, &text)?;
                Err(ClientError::Rejected {
                    status,
                    message: text,
                })
            }
            Err(e) => {
                error!(error = %e, "Failed to send order.");
                self.show_message(MessageKind::Error, &t!("ordering.communication_error"))?;
                Err(e)
            }
        }
    }

    /// Overwrites the status line with `text`.
    pub fn show_message(&mut self, kind: MessageKind, text: &str) -> Result<(), ClientError> {
        let html = self.templates.render_value(
            "status_message.html",
            &json!({ "kind": kind.css_class(), "text": text }),
        )?;
        self.target.replace(STATUS_MESSAGE, html);
        Ok(())
    }

    fn render_title(&mut self, text: &str) -> Result<(), ClientError> {
        let html = self
            .templates
            .render_value("title.html", &json!({ "text": text }))?;
        self.target.replace(TITLE, html);
        Ok(())
    }

    fn render_snacks(&mut self) -> Result<(), ClientError> {
        let cards: Vec<SnackCard> = self
            .catalog
            .iter()
            .map(|(id, snack)| SnackCard {
                id,
                name: &snack.name,
                image: self.api.image_url(&snack.image_url),
                selected: self.selected.as_deref() == Some(id.as_str()),
            })
            .collect();
        let html = self
            .templates
            .render_value("snack_cards.html", &json!({ "cards": cards }))?;
        self.target.replace(SNACKS, html);
        Ok(())
    }

    fn render_seat(&mut self, seat_id: &str, seat: &SeatStatus) -> Result<(), ClientError> {
        let html = self.templates.render_value(
            "seat_card.html",
            &json!({
                "seat_id": seat_id,
                "status_class": status_class_suffix(&seat.loyalty_status),
                "loyalty_status": seat.loyalty_status,
                "order_count": seat.snack_order_count,
                "labels": {
                    "seat": t!("ordering.seat_label"),
                    "loyalty": t!("ordering.loyalty_label"),
                    "orders": t!("ordering.orders_label"),
                },
            }),
        )?;
        self.target.replace(MY_SEAT, html);
        Ok(())
    }
}
