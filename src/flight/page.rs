use serde::Serialize;
use serde_json::json;
use tracing::{error, info, warn};

use super::api::FlightApi;
use super::models::FlightStatusReport;
use super::status::{compact_label, status_class};
use crate::error::ClientError;
use crate::render::{Region, RenderTarget, Templates};

pub const SEARCH_RESULT: Region = Region("flight-result-container");
pub const ALL_FLIGHTS: Region = Region("all-flights-list-container");

const TEMPLATES: &[(&str, &str)] = &[
    (
        "placeholder.html",
        r#"<p class="placeholder{% if failed %} error{% endif %}">{{ message }}</p>"#,
    ),
    (
        "error_card.html",
        r#"<div class="flight-card status-erro"><p>{{ message }}</p></div>"#,
    ),
    (
        "flight_card.html",
        r#"<div class="flight-card {{ flight.status_class }}">
    <h3>
        {{ flight.code }}
        <span class="status-tag">{{ flight.label }}</span>
    </h3>
    <div class="flight-info">
        <p><strong>{{ labels.origin }}:</strong> {{ flight.origin }}</p>
        <p><strong>{{ labels.destination }}:</strong> {{ flight.destination }}</p>
        <p><strong>{{ labels.date }}:</strong> {{ flight.day }}</p>
        <p><strong>{{ labels.departure }}:</strong> {{ flight.scheduled_departure }}</p>
        <p><strong>{{ labels.arrival }}:</strong> {{ flight.scheduled_arrival }}</p>
        <p><strong>{{ labels.flight_type }}:</strong> {{ flight.flight_type }}</p>
    </div>
    {%- if flight.delayed %}
    <div class="delayed-info">
        <p><strong>{{ labels.new_departure }}:</strong> {{ flight.new_departure }}</p>
        <p><strong>{{ labels.new_arrival }}:</strong> {{ flight.new_arrival }}</p>
    </div>
    {%- endif %}
</div>"#,
    ),
    (
        "flight_list.html",
        r#"{% for flight in flights %}<div class="mini-flight-card">
    <div class="info">
        <strong>{{ flight.code }}</strong>
        <p>{{ flight.origin }} → {{ flight.destination }}</p>
    </div>
    <div class="mini-status-tag {{ flight.status_class }}">{{ flight.label }}</div>
</div>
{% endfor %}"#,
    ),
];

/// User actions on the flight-status page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlightEvent {
    SearchClicked { input: String },
    /// A key released while the code input has focus.
    KeyUp { key: String, input: String },
}

#[derive(Serialize)]
struct FlightView<'a> {
    code: &'a str,
    origin: &'a str,
    destination: &'a str,
    day: &'a str,
    scheduled_departure: &'a str,
    scheduled_arrival: &'a str,
    flight_type: &'a str,
    label: &'a str,
    status_class: String,
    delayed: bool,
    new_departure: &'a str,
    new_arrival: &'a str,
}

impl<'a> FlightView<'a> {
    fn detail(report: &'a FlightStatusReport) -> Self {
        Self::with_label(report, &report.computed_status)
    }

    fn compact(report: &'a FlightStatusReport) -> Self {
        Self::with_label(report, compact_label(&report.computed_status))
    }

    fn with_label(report: &'a FlightStatusReport, label: &'a str) -> Self {
        let info = &report.flight_info;
        Self {
            code: &info.code,
            origin: &info.origin,
            destination: &info.destination,
            day: &info.day,
            scheduled_departure: &info.scheduled_departure,
            scheduled_arrival: &info.scheduled_arrival,
            flight_type: &info.flight_type,
            label,
            status_class: status_class(&report.computed_status),
            delayed: info.is_delayed(),
            new_departure: info.new_departure.as_deref().unwrap_or_default(),
            new_arrival: info.new_arrival.as_deref().unwrap_or_default(),
        }
    }
}

/// Flight search plus the list of all scheduled flights.
pub struct FlightStatusPage<R: RenderTarget> {
    api: FlightApi,
    target: R,
    templates: Templates,
}

impl<R: RenderTarget> FlightStatusPage<R> {
    pub fn new(api: FlightApi, target: R) -> Result<Self, ClientError> {
        Ok(Self {
            api,
            target,
            templates: Templates::new(TEMPLATES)?,
        })
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn into_target(self) -> R {
        self.target
    }

    /// Page-ready trigger.
    pub async fn init(&mut self) -> Result<(), ClientError> {
        self.fetch_all_flights().await
    }

    pub async fn handle(&mut self, event: FlightEvent) -> Result<(), ClientError> {
        match event {
            FlightEvent::SearchClicked { input } => self.fetch_flight_status(&input).await,
            FlightEvent::KeyUp { key, input } if key == "Enter" => {
                self.fetch_flight_status(&input).await
            }
            FlightEvent::KeyUp { .. } => Ok(()),
        }
    }

    /// Looks up one flight by the code typed into the search input.
    pub async fn fetch_flight_status(&mut self, input: &str) -> Result<(), ClientError> {
        let code = input.trim().to_uppercase();
        if code.is_empty() {
            self.target.alert(&t!("flight.enter_code"));
            return Err(ClientError::MissingFlightCode);
        }

        self.render_placeholder(SEARCH_RESULT, &t!("flight.searching"), false)?;

        match self.api.flight(&code).await {
            Ok(report) => {
                info!(code = %code, status = %report.computed_status, "Flight found.");
                let html = self.templates.render_value(
                    "flight_card.html",
                    &json!({
                        "flight": FlightView::detail(&report),
                        "labels": {
                            "origin": t!("flight.origin_label"),
                            "destination": t!("flight.destination_label"),
                            "date": t!("flight.date_label"),
                            "departure": t!("flight.departure_label"),
                            "arrival": t!("flight.arrival_label"),
                            "flight_type": t!("flight.type_label"),
                            "new_departure": t!("flight.new_departure_label"),
                            "new_arrival": t!("flight.new_arrival_label"),
                        },
                    }),
                )?;
                self.target.replace(SEARCH_RESULT, html);
                Ok(())
            }
            Err(ClientError::NotFound(code)) => {
                warn!(code = %code, "Flight not found.");
                self.render_error_card(&t!("flight.not_found"))?;
                Err(ClientError::NotFound(code))
            }
            Err(e) => {
                error!(code = %code, error = %e, "Flight lookup failed.");
                self.render_error_card(&t!("flight.communication_error"))?;
                Err(e)
            }
        }
    }

    /// Fills the list region with one compact card per scheduled flight.
    pub async fn fetch_all_flights(&mut self) -> Result<(), ClientError> {
        match self.api.all_flights().await {
            Ok(flights) if flights.is_empty() => {
                info!("No flights scheduled.");
                self.render_placeholder(ALL_FLIGHTS, &t!("flight.no_flights"), false)
            }
            Ok(flights) => {
                info!(count = flights.len(), "Flight list loaded.");
                let views: Vec<FlightView> = flights.iter().map(FlightView::compact).collect();
                let html = self
                    .templates
                    .render_value("flight_list.html", &json!({ "flights": views }))?;
                self.target.replace(ALL_FLIGHTS, html);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to load flight list.");
                self.render_placeholder(ALL_FLIGHTS, &t!("flight.list_failed"), true)?;
                Err(e)
            }
        }
    }

    fn render_placeholder(
        &mut self,
        region: Region,
        message: &str,
        failed: bool,
    ) -> Result<(), ClientError> {
        let html = self.templates.render_value(
            "placeholder.html",
            &json!({ "message": message, "failed": failed }),
        )?;
        self.target.replace(region, html);
        Ok(())
    }

    fn render_error_card(&mut self, message: &str) -> Result<(), ClientError> {
        let html = self
            .templates
            .render_value("error_card.html", &json!({ "message": message }))?;
        self.target.replace(SEARCH_RESULT, html);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MemoryTarget;
    use crate::testing::{FakeHttp, Recorded};
    use std::sync::Arc;

    const BASE: &str = "http://127.0.0.1:8000";

    fn report(code: &str, raw_status: Option<&str>, computed: &str) -> serde_json::Value {
        let (new_departure, new_arrival) = match raw_status {
            Some("Adiado") | Some("Delayed") => (Some("22:40"), Some("23:50")),
            _ => (None, None),
        };
        json!({
            "info_voo": {
                "codigo_voo": code,
                "origem": "VCP (Campinas)",
                "destino": "SDU (Rio de Janeiro)",
                "voo": "Nacional",
                "dia_partida": "21-10-2025",
                "partida_programada": "09:00",
                "chegada_programada": "10:05",
                "status": raw_status,
                "nova_partida": new_departure,
                "nova_chegada": new_arrival,
            },
            "status_calculado": computed,
        })
    }

    fn page(http: &Arc<FakeHttp>) -> FlightStatusPage<MemoryTarget> {
        FlightStatusPage::new(FlightApi::new(http.clone(), BASE), MemoryTarget::new()).unwrap()
    }

    fn region(page: &FlightStatusPage<MemoryTarget>, region: Region) -> String {
        page.target().content(region).unwrap_or_default().to_string()
    }

    #[tokio::test]
    async fn test_empty_code_alerts_without_request() {
        let http = Arc::new(FakeHttp::new());
        let mut page = page(&http);

        let err = page.fetch_flight_status("   ").await.unwrap_err();
        assert!(matches!(err, ClientError::MissingFlightCode));
        assert_eq!(page.target().alerts(), ["Please enter a flight code."]);
        assert!(http.requests().is_empty());
        assert_eq!(page.target().content(SEARCH_RESULT), None);
    }

    #[tokio::test]
    async fn test_code_trimmed_and_uppercased() {
        let http = Arc::new(FakeHttp::new());
        http.route(
            &format!("{BASE}/status/AD4070"),
            200,
            &report("AD4070", None, "Decolado").to_string(),
        );
        let mut page = page(&http);
        page.fetch_flight_status("  ad4070 ").await.unwrap();

        assert_eq!(
            http.requests(),
            vec![Recorded::Get(format!("{BASE}/status/AD4070"))]
        );
        let html = region(&page, SEARCH_RESULT);
        assert!(html.contains(r#"class="flight-card status-decolado""#));
        assert!(html.contains(r#"<span class="status-tag">Decolado</span>"#));
        assert!(html.contains("Origin:</strong> VCP (Campinas)"));
        assert!(!html.contains("delayed-info"));
    }

    #[tokio::test]
    async fn test_delayed_detail_shows_new_times() {
        let http = Arc::new(FakeHttp::new());
        http.route(
            &format!("{BASE}/status/AD5001"),
            200,
            &report("AD5001", Some("Adiado"), "Adiado - Aterrissando").to_string(),
        );
        let mut page = page(&http);
        page.fetch_flight_status("AD5001").await.unwrap();

        let html = region(&page, SEARCH_RESULT);
        assert!(html.contains("status-adiado"));
        assert!(html.contains("Adiado - Aterrissando"));
        assert!(html.contains(r#"<div class="delayed-info">"#));
        assert!(html.contains("New Departure:</strong> 22:40"));
        assert!(html.contains("New Arrival:</strong> 23:50"));
    }

    #[tokio::test]
    async fn test_english_delayed_marker() {
        let http = Arc::new(FakeHttp::new());
        http.route(
            &format!("{BASE}/status/AD7010"),
            200,
            &report("AD7010", Some("Delayed"), "Delayed - 10min").to_string(),
        );
        http.route(
            &format!("{BASE}/status/all"),
            200,
            &json!([report("AD7010", Some("Delayed"), "Delayed - 10min")]).to_string(),
        );
        let mut page = page(&http);
        page.fetch_flight_status("AD7010").await.unwrap();
        page.fetch_all_flights().await.unwrap();

        let html = region(&page, SEARCH_RESULT);
        assert!(html.contains(r#"class="flight-card status-delayed""#));
        assert!(html.contains(r#"<span class="status-tag">Delayed - 10min</span>"#));
        assert!(html.contains(r#"<div class="delayed-info">"#));
        assert!(html.contains("New Departure:</strong> 22:40"));
        assert!(html.contains("New Arrival:</strong> 23:50"));

        let list = region(&page, ALL_FLIGHTS);
        assert!(list.contains(r#"<div class="mini-status-tag status-delayed">10min</div>"#));
    }

    #[tokio::test]
    async fn test_unknown_flight_renders_error_card() {
        let http = Arc::new(FakeHttp::new());
        http.route(&format!("{BASE}/status/XX1"), 404, r#"{"detail":"Voo não encontrado"}"#);
        let mut page = page(&http);

        let err = page.fetch_flight_status("xx1").await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
        let html = region(&page, SEARCH_RESULT);
        assert!(html.contains("flight-card status-erro"));
        assert!(html.contains("Flight not found."));
    }

    #[tokio::test]
    async fn test_lookup_transport_failure() {
        let http = Arc::new(FakeHttp::new());
        let mut page = page(&http);

        let err = page.fetch_flight_status("AD1").await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert!(region(&page, SEARCH_RESULT).contains("Error communicating with the server."));
        assert_eq!(page.target().replacements(SEARCH_RESULT), 2);
    }

    #[tokio::test]
    async fn test_empty_list_single_placeholder() {
        let http = Arc::new(FakeHttp::new());
        http.route(&format!("{BASE}/status/all"), 200, "[]");
        let mut page = page(&http);
        page.init().await.unwrap();

        let html = region(&page, ALL_FLIGHTS);
        assert_eq!(html.matches("<p class=\"placeholder\">").count(), 1);
        assert_eq!(html.matches("mini-flight-card").count(), 0);
        assert!(html.contains("No flights scheduled for today."));
    }

    #[tokio::test]
    async fn test_list_compact_cards() {
        let http = Arc::new(FakeHttp::new());
        let flights = json!([
            report("AD5001", Some("Adiado"), "Adiado - Aterrissando"),
            report("AD4130", Some("Cancelado"), "Cancelado"),
            report("AD2550", None, "Programado"),
        ]);
        http.route(&format!("{BASE}/status/all"), 200, &flights.to_string());
        let mut page = page(&http);
        page.init().await.unwrap();

        let html = region(&page, ALL_FLIGHTS);
        assert_eq!(html.matches(r#"<div class="mini-flight-card">"#).count(), 3);
        assert!(html.contains(r#"<div class="mini-status-tag status-adiado">Aterrissando</div>"#));
        assert!(html.contains(r#"<div class="mini-status-tag status-cancelado">Cancelado</div>"#));
        assert!(html.contains("VCP (Campinas) → SDU (Rio de Janeiro)"));
        assert!(!html.contains("Adiado - "));
    }

    #[tokio::test]
    async fn test_list_failure_placeholder() {
        let http = Arc::new(FakeHttp::new());
        http.route(&format!("{BASE}/status/all"), 500, "Internal Server Error");
        let mut page = page(&http);

        assert!(page.init().await.is_err());
        let html = region(&page, ALL_FLIGHTS);
        assert!(html.contains(r#"class="placeholder error""#));
        assert!(html.contains("Could not load the flight list."));
    }

    #[tokio::test]
    async fn test_enter_key_searches_other_keys_do_not() {
        let http = Arc::new(FakeHttp::new());
        http.route(
            &format!("{BASE}/status/AD2550"),
            200,
            &report("AD2550", None, "Programado").to_string(),
        );
        let mut page = page(&http);

        page.handle(FlightEvent::KeyUp {
            key: "A".to_string(),
            input: "AD2550".to_string(),
        })
        .await
        .unwrap();
        assert!(http.requests().is_empty());

        page.handle(FlightEvent::KeyUp {
            key: "Enter".to_string(),
            input: "AD2550".to_string(),
        })
        .await
        .unwrap();
        page.handle(FlightEvent::SearchClicked {
            input: "AD2550".to_string(),
        })
        .await
        .unwrap();
        assert_eq!(http.requests().len(), 2);
        assert!(region(&page, SEARCH_RESULT).contains("status-programado"));
    }
}
