//! Wire models for the dashboard and upload endpoints.
//!
//! Field names follow the backend's JSON exactly (Portuguese, snake_case).
//! Optional fields the backend only sometimes sends carry `#[serde(default)]`
//! so older servers still decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Dashboard Statistics
// =============================================================================

/// Response of `GET /api/dashboard/stats/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub estatisticas_gerais: GeneralStats,
    #[serde(default)]
    pub materiais: Vec<MaterialCount>,
    #[serde(default)]
    pub espessuras: Vec<ThicknessCount>,
    #[serde(default)]
    pub ultimas_pecas: Vec<RecentPart>,
}

/// Aggregate counters shown on the stat cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralStats {
    pub total_pecas_principais: u64,
    pub total_subpecas: u64,
    pub pecas_recentes_7dias: u64,
    pub perimetro_medio_mm: f64,
    #[serde(default)]
    pub tempo_corte_medio_segundos: Option<f64>,
}

/// Sub-part count per material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCount {
    pub material: String,
    pub quantidade: u64,
}

/// Sub-part count per sheet thickness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThicknessCount {
    pub espessura: String,
    pub quantidade: u64,
}

/// Most recently registered parts, as listed in the stats payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentPart {
    pub codigo: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub total_subpecas: u64,
    pub materiais_unicos: u64,
    pub espessuras_unicas: u64,
}

// =============================================================================
// Part Listing
// =============================================================================

/// Response of `GET /api/dashboard/pecas/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartPage {
    pub pecas: Vec<PartRecord>,
    pub paginacao: Pagination,
}

/// One row of the part table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartRecord {
    pub codigo: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub total_subpecas: u64,
    pub materiais_unicos: u64,
    pub espessuras_unicas: u64,
    pub perimetro_total: f64,
    pub tempo_corte_total: f64,
}

/// Server-side pagination block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub pagina_atual: u32,
    pub tamanho_pagina: u32,
    pub total_pecas: u64,
    pub total_paginas: u32,
}

impl Pagination {
    /// First page of an empty listing.
    pub fn first(page_size: u32) -> Self {
        Self {
            pagina_atual: 1,
            tamanho_pagina: page_size,
            total_pecas: 0,
            total_paginas: 1,
        }
    }

    /// Page count, never below one.
    ///
    /// An empty listing reports `total_paginas = 0`; the UI still shows
    /// "Página 1 de 1".
    pub fn last_page(&self) -> u32 {
        self.total_paginas.max(1)
    }

    /// Copy with the current page forced into `[1, last_page]`.
    pub fn clamped(mut self) -> Self {
        self.pagina_atual = self.pagina_atual.clamp(1, self.last_page());
        self
    }

    pub fn has_previous(&self) -> bool {
        self.pagina_atual > 1
    }

    pub fn has_next(&self) -> bool {
        self.pagina_atual < self.last_page()
    }

    /// Label displayed between the pagination buttons.
    pub fn label(&self) -> String {
        format!("Página {} de {}", self.pagina_atual, self.last_page())
    }
}

// =============================================================================
// Part Detail
// =============================================================================

/// Response of `GET /api/dashboard/pecas/{codigo}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDetail {
    pub peca: PartHeader,
    pub estatisticas: PartStatistics,
    #[serde(default)]
    pub subpecas: Vec<SubPartRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartHeader {
    pub codigo: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Totals and averages over a part's sub-parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartStatistics {
    pub total_subpecas: u64,
    pub materiais_unicos: u64,
    pub espessuras_unicas: u64,
    pub perimetro_total: f64,
    pub tempo_corte_total: f64,
    pub perimetro_medio: f64,
    pub tempo_corte_medio: f64,
}

/// A single cut piece belonging to a part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubPartRecord {
    pub codigo: String,
    pub nome: String,
    pub material: String,
    pub espessura: String,
    pub perimetro_mm: f64,
    pub tempo_corte_segundos: f64,
}

// =============================================================================
// Upload
// =============================================================================

/// Response of `POST /api/upload/`.
///
/// The client only needs the summary fields; `grupos` is kept opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub status: String,
    #[serde(default)]
    pub formato_arquivo: Option<String>,
    #[serde(default)]
    pub total_arquivos: Option<u64>,
    #[serde(default)]
    pub grupos: Value,
    #[serde(default)]
    pub validacao: Option<UploadValidation>,
}

/// Persistence outcome reported by the backend after extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadValidation {
    pub sucesso: bool,
    #[serde(default)]
    pub pecas_salvas: Vec<String>,
    #[serde(default)]
    pub erros_validacao: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_deserialization() {
        let json = r#"{
            "estatisticas_gerais": {
                "total_pecas_principais": 42,
                "total_subpecas": 310,
                "pecas_recentes_7dias": 5,
                "perimetro_medio_mm": 1523.47,
                "tempo_corte_medio_segundos": 88.1
            },
            "materiais": [{"material": "AÇO 1020", "quantidade": 120}],
            "espessuras": [{"espessura": "3.00", "quantidade": 80}],
            "ultimas_pecas": [{
                "codigo": "P-001",
                "created_at": "2024-03-01T12:00:00Z",
                "total_subpecas": 3,
                "materiais_unicos": 1,
                "espessuras_unicas": 2
            }]
        }"#;

        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.estatisticas_gerais.total_pecas_principais, 42);
        assert_eq!(stats.materiais[0].material, "AÇO 1020");
        assert_eq!(stats.espessuras[0].quantidade, 80);
        assert_eq!(stats.ultimas_pecas.len(), 1);
        assert!(stats.ultimas_pecas[0].created_at.is_some());
    }

    #[test]
    fn test_stats_optional_sections_missing() {
        let json = r#"{"estatisticas_gerais": {
            "total_pecas_principais": 0,
            "total_subpecas": 0,
            "pecas_recentes_7dias": 0,
            "perimetro_medio_mm": 0
        }}"#;

        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert!(stats.materiais.is_empty());
        assert!(stats.ultimas_pecas.is_empty());
        assert_eq!(stats.estatisticas_gerais.tempo_corte_medio_segundos, None);
    }

    #[test]
    fn test_part_page_with_null_dates() {
        let json = r#"{
            "pecas": [{
                "codigo": "ABC-10",
                "created_at": null,
                "updated_at": "2024-05-02T08:15:30.123456Z",
                "total_subpecas": 4,
                "materiais_unicos": 2,
                "espessuras_unicas": 1,
                "perimetro_total": 2048.5,
                "tempo_corte_total": 311.25
            }],
            "paginacao": {"pagina_atual": 1, "tamanho_pagina": 10, "total_pecas": 1, "total_paginas": 1}
        }"#;

        let page: PartPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.pecas[0].created_at, None);
        assert!(page.pecas[0].updated_at.is_some());
        assert_eq!(page.paginacao.total_pecas, 1);
    }

    #[test]
    fn test_pagination_bounds() {
        let mut p = Pagination { pagina_atual: 1, tamanho_pagina: 10, total_pecas: 50, total_paginas: 5 };
        assert!(!p.has_previous());
        assert!(p.has_next());

        p.pagina_atual = 5;
        assert!(p.has_previous());
        assert!(!p.has_next());
    }

    #[test]
    fn test_empty_listing_is_single_page() {
        let p = Pagination { pagina_atual: 3, tamanho_pagina: 10, total_pecas: 0, total_paginas: 0 }.clamped();
        assert_eq!(p.pagina_atual, 1);
        assert_eq!(p.label(), "Página 1 de 1");
        assert!(!p.has_previous());
        assert!(!p.has_next());
    }

    #[test]
    fn test_upload_response_with_validation_errors() {
        let json = r#"{
            "status": "upload concluído com sucesso",
            "formato_arquivo": "ZIP",
            "total_arquivos": 12,
            "grupos": {"G1": []},
            "validacao": {
                "sucesso": false,
                "pecas_salvas": ["P-1"],
                "erros_validacao": ["Subpeça S-2: Campo obrigatório 'Material' está vazio ou nulo"]
            }
        }"#;

        let resp: UploadResponse = serde_json::from_str(json).unwrap();
        let validation = resp.validacao.unwrap();
        assert!(!validation.sucesso);
        assert_eq!(validation.pecas_salvas, vec!["P-1"]);
        assert_eq!(validation.erros_validacao.len(), 1);
    }
}
