//! Dashboard state and its update function.
//!
//! All dashboard state lives in one [`DashboardState`] value. The frontend
//! owns the network calls; it asks the state for the next request
//! ([`DashboardState::begin_parts_request`], [`DashboardState::open_detail`]),
//! performs it, and hands the outcome back through [`DashboardState::apply`].
//!
//! # Stale responses
//!
//! List and detail requests are tagged with a [`RequestId`] from a
//! per-slot counter. A response is applied only when its id is the latest
//! issued for that slot, so a slow answer for an old search term can never
//! overwrite the results of a newer one. Superseded requests are left to
//! finish; their results are dropped on arrival.

use crate::error::ApiError;
use crate::request::{Generation, RequestId};
use crate::format::{format_date, format_decimal};
use crate::models::{
    DashboardStats, PartDetail, PartPage, PartRecord, PartStatistics, Pagination, SubPartRecord,
};

/// Rows per page unless the user picks another size.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page sizes offered in the selector.
pub const PAGE_SIZE_OPTIONS: [u32; 3] = [10, 25, 50];

// =============================================================================
// State
// =============================================================================

/// Parameters of one listing request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartsQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: String,
}

/// Detail overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Closed,
    Loading { codigo: String },
    Loaded(PartDetail),
    Failed { codigo: String, message: String },
}

impl DetailState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DetailState::Closed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading { .. })
    }

    /// Code of the part the overlay is about.
    pub fn codigo(&self) -> Option<&str> {
        match self {
            DetailState::Closed => None,
            DetailState::Loading { codigo } | DetailState::Failed { codigo, .. } => Some(codigo),
            DetailState::Loaded(detail) => Some(&detail.peca.codigo),
        }
    }
}

/// Everything the dashboard page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub stats: Option<DashboardStats>,
    pub stats_error: Option<String>,
    pub parts: Vec<PartRecord>,
    pub pagination: Pagination,
    pub search: String,
    pub parts_loading: bool,
    pub parts_error: Option<String>,
    pub detail: DetailState,
    parts_generation: Generation,
    detail_generation: Generation,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Inputs to [`DashboardState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    StatsLoaded(DashboardStats),
    StatsFailed(ApiError),
    /// Search box edited; always returns to page 1.
    SearchChanged(String),
    PageSizeChanged(u32),
    PreviousPage,
    NextPage,
    PartsLoaded { request: RequestId, page: PartPage },
    PartsFailed { request: RequestId, error: ApiError },
    DetailLoaded { request: RequestId, detail: PartDetail },
    DetailFailed { request: RequestId, error: ApiError },
    CloseDetail,
}

impl DashboardState {
    pub fn new(page_size: u32) -> Self {
        Self {
            stats: None,
            stats_error: None,
            parts: Vec::new(),
            pagination: Pagination::first(page_size.max(1)),
            search: String::new(),
            parts_loading: false,
            parts_error: None,
            detail: DetailState::Closed,
            parts_generation: Generation::default(),
            detail_generation: Generation::default(),
        }
    }

    /// True until the first stats response (or error) arrives.
    pub fn stats_loading(&self) -> bool {
        self.stats.is_none() && self.stats_error.is_none()
    }

    /// Listing request matching the current page, size and search term.
    pub fn parts_query(&self) -> PartsQuery {
        PartsQuery {
            page: self.pagination.pagina_atual,
            page_size: self.pagination.tamanho_pagina,
            search: self.search.clone(),
        }
    }

    /// Marks the list as loading and issues the id for the next listing
    /// request. Any older listing request becomes stale.
    pub fn begin_parts_request(&mut self) -> (RequestId, PartsQuery) {
        self.parts_loading = true;
        self.parts_error = None;
        (self.parts_generation.issue(), self.parts_query())
    }

    /// Opens the detail overlay for `codigo` and issues the id of its fetch.
    /// The previous detail, if any, is discarded.
    pub fn open_detail(&mut self, codigo: impl Into<String>) -> RequestId {
        self.detail = DetailState::Loading {
            codigo: codigo.into(),
        };
        self.detail_generation.issue()
    }

    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::StatsLoaded(stats) => {
                self.stats = Some(stats);
                self.stats_error = None;
            }
            DashboardAction::StatsFailed(error) => {
                log::warn!("Stats refresh failed: {}", error);
                self.stats_error = Some(format!("Erro ao buscar estatísticas: {}", error));
            }
            DashboardAction::SearchChanged(search) => {
                if search != self.search {
                    self.search = search;
                    self.pagination.pagina_atual = 1;
                }
            }
            DashboardAction::PageSizeChanged(size) => {
                let size = size.max(1);
                if size != self.pagination.tamanho_pagina {
                    self.pagination.tamanho_pagina = size;
                    self.pagination.pagina_atual = 1;
                }
            }
            DashboardAction::PreviousPage => {
                if self.pagination.has_previous() {
                    self.pagination.pagina_atual -= 1;
                }
            }
            DashboardAction::NextPage => {
                if self.pagination.has_next() {
                    self.pagination.pagina_atual += 1;
                }
            }
            DashboardAction::PartsLoaded { request, page } => {
                if !self.parts_generation.is_current(request) {
                    log::debug!("Dropping stale listing response {:?}", request);
                    return;
                }
                self.parts = page.pecas;
                let mut pagination = page.paginacao.clamped();
                pagination.tamanho_pagina = pagination.tamanho_pagina.max(1);
                self.pagination = pagination;
                self.parts_loading = false;
            }
            DashboardAction::PartsFailed { request, error } => {
                if !self.parts_generation.is_current(request) {
                    log::debug!("Dropping stale listing error {:?}", request);
                    return;
                }
                log::warn!("Listing failed: {}", error);
                self.parts_error = Some(format!("Erro ao buscar peças: {}", error));
                self.parts_loading = false;
            }
            DashboardAction::DetailLoaded { request, detail } => {
                if self.detail.is_open() && self.detail_generation.is_current(request) {
                    self.detail = DetailState::Loaded(detail);
                } else {
                    log::debug!("Dropping stale detail response {:?}", request);
                }
            }
            DashboardAction::DetailFailed { request, error } => {
                if !(self.detail.is_open() && self.detail_generation.is_current(request)) {
                    return;
                }
                let codigo = self.detail.codigo().unwrap_or_default().to_string();
                let message = match error.status() {
                    Some(404) => format!("Peça {} não encontrada.", codigo),
                    _ => format!("Erro ao buscar detalhes da peça: {}", error),
                };
                self.detail = DetailState::Failed { codigo, message };
            }
            DashboardAction::CloseDetail => {
                self.detail = DetailState::Closed;
                self.detail_generation.invalidate();
            }
        }
    }
}

// =============================================================================
// View models
// =============================================================================

/// One summary card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
}

/// Cards shown at the top of the dashboard, in display order.
pub fn stat_cards(stats: &DashboardStats) -> Vec<StatCard> {
    let general = &stats.estatisticas_gerais;
    let mut cards = vec![
        StatCard {
            title: "Total de Peças",
            value: general.total_pecas_principais.to_string(),
        },
        StatCard {
            title: "Total de Subpeças",
            value: general.total_subpecas.to_string(),
        },
        StatCard {
            title: "Peças nos últimos 7 dias",
            value: general.pecas_recentes_7dias.to_string(),
        },
        StatCard {
            title: "Perímetro Médio (mm)",
            value: format_decimal(general.perimetro_medio_mm),
        },
    ];
    if let Some(avg) = general.tempo_corte_medio_segundos {
        cards.push(StatCard {
            title: "Tempo de Corte Médio (s)",
            value: format_decimal(avg),
        });
    }
    cards
}

/// One bar of a breakdown chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub quantity: u64,
    /// Width relative to the largest bar, `0.0..=100.0`.
    pub percent: f64,
}

/// Scales `(label, quantity)` pairs against the largest quantity.
pub fn breakdown_bars<'a>(items: impl IntoIterator<Item = (&'a str, u64)>) -> Vec<BarDatum> {
    let items: Vec<_> = items.into_iter().collect();
    let max = items.iter().map(|(_, q)| *q).max().unwrap_or(0);

    items
        .into_iter()
        .map(|(label, quantity)| BarDatum {
            label: label.to_string(),
            quantity,
            percent: if max == 0 {
                0.0
            } else {
                quantity as f64 * 100.0 / max as f64
            },
        })
        .collect()
}

/// Bars for the material breakdown.
pub fn material_bars(stats: &DashboardStats) -> Vec<BarDatum> {
    breakdown_bars(stats.materiais.iter().map(|m| (m.material.as_str(), m.quantidade)))
}

/// Bars for the thickness breakdown.
pub fn thickness_bars(stats: &DashboardStats) -> Vec<BarDatum> {
    breakdown_bars(stats.espessuras.iter().map(|e| (e.espessura.as_str(), e.quantidade)))
}

/// Part table row with every column already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartRow {
    pub codigo: String,
    pub date: String,
    pub subparts: String,
    pub materials: String,
    pub thicknesses: String,
    pub perimeter: String,
    pub cut_time: String,
}

impl From<&PartRecord> for PartRow {
    fn from(part: &PartRecord) -> Self {
        Self {
            codigo: part.codigo.clone(),
            date: format_date(part.created_at.as_ref()),
            subparts: part.total_subpecas.to_string(),
            materials: part.materiais_unicos.to_string(),
            thicknesses: part.espessuras_unicas.to_string(),
            perimeter: format_decimal(part.perimetro_total),
            cut_time: format_decimal(part.tempo_corte_total),
        }
    }
}

/// Summary cards of the detail overlay.
pub fn detail_cards(stats: &PartStatistics) -> Vec<StatCard> {
    vec![
        StatCard { title: "Subpeças", value: stats.total_subpecas.to_string() },
        StatCard { title: "Materiais Únicos", value: stats.materiais_unicos.to_string() },
        StatCard { title: "Espessuras Únicas", value: stats.espessuras_unicas.to_string() },
        StatCard { title: "Perímetro Total (mm)", value: format_decimal(stats.perimetro_total) },
        StatCard { title: "Tempo de Corte Total (s)", value: format_decimal(stats.tempo_corte_total) },
        StatCard { title: "Perímetro Médio (mm)", value: format_decimal(stats.perimetro_medio) },
        StatCard { title: "Tempo de Corte Médio (s)", value: format_decimal(stats.tempo_corte_medio) },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubPartRow {
    pub codigo: String,
    pub nome: String,
    pub material: String,
    pub espessura: String,
    pub perimeter: String,
    pub cut_time: String,
}

impl From<&SubPartRecord> for SubPartRow {
    fn from(sub: &SubPartRecord) -> Self {
        Self {
            codigo: sub.codigo.clone(),
            nome: sub.nome.clone(),
            material: sub.material.clone(),
            espessura: sub.espessura.clone(),
            perimeter: format_decimal(sub.perimetro_mm),
            cut_time: format_decimal(sub.tempo_corte_segundos),
        }
    }
}

/// Sub-part table rows of a loaded detail.
pub fn subpart_rows(detail: &PartDetail) -> Vec<SubPartRow> {
    detail.subpecas.iter().map(SubPartRow::from).collect()
}

impl DashboardState {
    /// Rows of the current page.
    pub fn part_rows(&self) -> Vec<PartRow> {
        self.parts.iter().map(PartRow::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GeneralStats, MaterialCount, PartHeader, PartStatistics};

    fn part(codigo: &str) -> PartRecord {
        PartRecord {
            codigo: codigo.to_string(),
            created_at: None,
            updated_at: None,
            total_subpecas: 3,
            materiais_unicos: 1,
            espessuras_unicas: 2,
            perimetro_total: 1500.25,
            tempo_corte_total: 90.0,
        }
    }

    fn page(codes: &[&str], pagina_atual: u32, total_paginas: u32) -> PartPage {
        PartPage {
            pecas: codes.iter().map(|c| part(c)).collect(),
            paginacao: Pagination {
                pagina_atual,
                tamanho_pagina: 10,
                total_pecas: u64::from(total_paginas) * 10,
                total_paginas,
            },
        }
    }

    fn detail(codigo: &str) -> PartDetail {
        PartDetail {
            peca: PartHeader { codigo: codigo.into(), created_at: None, updated_at: None },
            estatisticas: PartStatistics {
                total_subpecas: 0,
                materiais_unicos: 0,
                espessuras_unicas: 0,
                perimetro_total: 0.0,
                tempo_corte_total: 0.0,
                perimetro_medio: 0.0,
                tempo_corte_medio: 0.0,
            },
            subpecas: Vec::new(),
        }
    }

    fn stats(total: u64) -> DashboardStats {
        DashboardStats {
            estatisticas_gerais: GeneralStats {
                total_pecas_principais: total,
                total_subpecas: 7,
                pecas_recentes_7dias: 1,
                perimetro_medio_mm: 250.5,
                tempo_corte_medio_segundos: None,
            },
            materiais: vec![
                MaterialCount { material: "INOX".into(), quantidade: 50 },
                MaterialCount { material: "AÇO".into(), quantidade: 25 },
            ],
            espessuras: Vec::new(),
            ultimas_pecas: Vec::new(),
        }
    }

    /// Loads a listing with `total_paginas` pages and lands on `at`.
    fn state_on_page(at: u32, total_paginas: u32) -> DashboardState {
        let mut state = DashboardState::default();
        let (req, _) = state.begin_parts_request();
        state.apply(DashboardAction::PartsLoaded { request: req, page: page(&["A"], 1, total_paginas) });
        while state.pagination.pagina_atual < at {
            state.apply(DashboardAction::NextPage);
        }
        state
    }

    #[test]
    fn test_initial_query() {
        let state = DashboardState::default();
        assert!(state.stats_loading());
        assert_eq!(state.parts_query(), PartsQuery { page: 1, page_size: 10, search: String::new() });
    }

    #[test]
    fn test_pagination_buttons_at_bounds() {
        let state = state_on_page(1, 5);
        assert!(!state.pagination.has_previous());
        assert!(state.pagination.has_next());

        let state = state_on_page(5, 5);
        assert_eq!(state.pagination.pagina_atual, 5);
        assert!(state.pagination.has_previous());
        assert!(!state.pagination.has_next());
    }

    #[test]
    fn test_page_moves_are_clamped() {
        let mut state = state_on_page(1, 2);
        state.apply(DashboardAction::PreviousPage);
        assert_eq!(state.parts_query().page, 1);

        state.apply(DashboardAction::NextPage);
        state.apply(DashboardAction::NextPage);
        state.apply(DashboardAction::NextPage);
        assert_eq!(state.parts_query().page, 2);
    }

    #[test]
    fn test_search_resets_page_before_next_fetch() {
        let mut state = state_on_page(3, 5);
        assert_eq!(state.parts_query().page, 3);

        state.apply(DashboardAction::SearchChanged("AB".into()));
        let (_, query) = state.begin_parts_request();
        assert_eq!(query, PartsQuery { page: 1, page_size: 10, search: "AB".into() });
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = state_on_page(2, 4);
        state.apply(DashboardAction::PageSizeChanged(25));
        assert_eq!(state.parts_query(), PartsQuery { page: 1, page_size: 25, search: String::new() });
    }

    #[test]
    fn test_listing_page_two_of_three() {
        let mut state = DashboardState::default();
        let (req, _) = state.begin_parts_request();
        state.apply(DashboardAction::PartsLoaded { request: req, page: page(&["X"], 1, 3) });
        state.apply(DashboardAction::NextPage);

        let (req, query) = state.begin_parts_request();
        assert_eq!(query, PartsQuery { page: 2, page_size: 10, search: String::new() });
        assert!(state.parts_loading);

        let codes: Vec<String> = (0..10).map(|i| format!("P-{i:02}")).collect();
        let refs: Vec<&str> = codes.iter().map(String::as_str).collect();
        state.apply(DashboardAction::PartsLoaded { request: req, page: page(&refs, 2, 3) });

        assert!(!state.parts_loading);
        assert_eq!(state.part_rows().len(), 10);
        assert_eq!(state.pagination.label(), "Página 2 de 3");
    }

    #[test]
    fn test_stale_listing_response_is_dropped() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::SearchChanged("A".into()));
        let (old, _) = state.begin_parts_request();
        state.apply(DashboardAction::SearchChanged("AB".into()));
        let (new, _) = state.begin_parts_request();

        state.apply(DashboardAction::PartsLoaded { request: new, page: page(&["AB-1"], 1, 1) });
        state.apply(DashboardAction::PartsLoaded { request: old, page: page(&["A-1", "A-2"], 1, 1) });
        assert_eq!(state.parts.len(), 1);
        assert_eq!(state.parts[0].codigo, "AB-1");

        state.apply(DashboardAction::PartsFailed {
            request: old,
            error: ApiError::Transport("late".into()),
        });
        assert!(state.parts_error.is_none());
    }

    #[test]
    fn test_listing_failure_stops_loading() {
        let mut state = DashboardState::default();
        let (req, _) = state.begin_parts_request();
        state.apply(DashboardAction::PartsFailed {
            request: req,
            error: ApiError::Status { status: 500, detail: None },
        });
        assert!(!state.parts_loading);
        assert!(state.parts_error.as_deref().unwrap().contains("500"));
    }

    #[test]
    fn test_out_of_range_page_is_clamped_on_load() {
        let mut state = DashboardState::default();
        let (req, _) = state.begin_parts_request();
        state.apply(DashboardAction::PartsLoaded { request: req, page: page(&[], 4, 2) });
        assert_eq!(state.pagination.pagina_atual, 2);

        let (req, _) = state.begin_parts_request();
        state.apply(DashboardAction::PartsLoaded { request: req, page: page(&[], 1, 0) });
        assert_eq!(state.pagination.label(), "Página 1 de 1");
    }

    #[test]
    fn test_stats_card_renders_total() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::StatsLoaded(stats(42)));
        assert!(!state.stats_loading());

        let cards = stat_cards(state.stats.as_ref().unwrap());
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].title, "Total de Peças");
        assert_eq!(cards[0].value, "42");
        assert_eq!(cards[3].value, "250,5");
    }

    #[test]
    fn test_stats_replaced_wholesale() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::StatsLoaded(stats(1)));
        state.apply(DashboardAction::StatsFailed(ApiError::Transport("offline".into())));
        // Last good stats stay visible next to the error
        assert_eq!(state.stats.as_ref().unwrap().estatisticas_gerais.total_pecas_principais, 1);
        assert!(state.stats_error.is_some());

        let mut newer = stats(2);
        newer.materiais.clear();
        state.apply(DashboardAction::StatsLoaded(newer));
        assert!(state.stats_error.is_none());
        assert!(state.stats.as_ref().unwrap().materiais.is_empty());
    }

    #[test]
    fn test_breakdown_bars_scale_to_max() {
        let bars = material_bars(&stats(0));
        assert_eq!(bars[0].percent, 100.0);
        assert_eq!(bars[1].percent, 50.0);
        assert!(breakdown_bars(std::iter::empty()).is_empty());
        assert_eq!(breakdown_bars([("x", 0)])[0].percent, 0.0);
    }

    #[test]
    fn test_detail_open_load_close() {
        let mut state = DashboardState::default();
        let req = state.open_detail("P-1");
        assert!(state.detail.is_loading());
        assert_eq!(state.detail.codigo(), Some("P-1"));

        state.apply(DashboardAction::DetailLoaded { request: req, detail: detail("P-1") });
        assert!(matches!(state.detail, DetailState::Loaded(_)));

        state.apply(DashboardAction::CloseDetail);
        assert_eq!(state.detail, DetailState::Closed);
    }

    #[test]
    fn test_detail_response_after_close_is_dropped() {
        let mut state = DashboardState::default();
        let req = state.open_detail("P-1");
        state.apply(DashboardAction::CloseDetail);
        state.apply(DashboardAction::DetailLoaded { request: req, detail: detail("P-1") });
        assert_eq!(state.detail, DetailState::Closed);
    }

    #[test]
    fn test_detail_reopen_ignores_previous_request() {
        let mut state = DashboardState::default();
        let first = state.open_detail("P-1");
        let second = state.open_detail("P-2");

        state.apply(DashboardAction::DetailLoaded { request: first, detail: detail("P-1") });
        assert_eq!(state.detail, DetailState::Loading { codigo: "P-2".into() });

        state.apply(DashboardAction::DetailFailed {
            request: second,
            error: ApiError::Status { status: 500, detail: None },
        });
        match &state.detail {
            DetailState::Failed { codigo, message } => {
                assert_eq!(codigo, "P-2");
                assert!(message.contains("500"));
            }
            other => panic!("unexpected detail state: {other:?}"),
        }
    }

    #[test]
    fn test_detail_cards_and_subpart_rows() {
        let mut d = detail("P-9");
        d.estatisticas.total_subpecas = 2;
        d.estatisticas.perimetro_medio = 1234.5;
        d.subpecas.push(SubPartRecord {
            codigo: "P-9-01".into(),
            nome: "Flange".into(),
            material: "INOX".into(),
            espessura: "3mm".into(),
            perimetro_mm: 812.456,
            tempo_corte_segundos: 42.0,
        });

        let cards = detail_cards(&d.estatisticas);
        assert_eq!(cards.len(), 7);
        assert_eq!(cards[0].value, "2");
        assert_eq!(cards[5].value, "1.234,5");

        let rows = subpart_rows(&d);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].perimeter, "812,46");
        assert_eq!(rows[0].cut_time, "42");
    }

    #[test]
    fn test_missing_part_has_friendly_message() {
        let mut state = DashboardState::default();
        let req = state.open_detail("P-404");
        state.apply(DashboardAction::DetailFailed {
            request: req,
            error: ApiError::Status { status: 404, detail: None },
        });
        assert_eq!(
            state.detail,
            DetailState::Failed {
                codigo: "P-404".into(),
                message: "Peça P-404 não encontrada.".into(),
            }
        );
    }
}
