use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flat, chart-ready summary of one day's simulations.
///
/// Serialized field names match what the dashboard frontend consumes
/// (`totalSimulacoes`, `kmTotal`, `rotasResumo`, ...). The default value
/// is the zero summary returned for empty or non-array input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resumo {
    /// Number of simulations in the input.
    pub total_simulacoes: usize,
    /// Sum of route-array lengths across all simulations.
    pub total_rotas: usize,
    /// Sum of the simulation-level reported order counts.
    pub total_pedidos: f64,
    /// Sum of the simulation-level reported visit counts.
    pub total_visitas: f64,
    /// Sum of the simulation-level reported vehicle counts.
    pub total_veiculos: f64,
    /// Item count recomputed bottom-up from routes' orders.
    pub total_itens: usize,
    pub peso_total: f64,
    pub volume_total: f64,
    pub cubagem_total: f64,
    pub km_total: f64,
    /// Arithmetic mean of `mediaKmPercorridaEntrega` across simulations.
    pub media_km_por_entrega: f64,
    /// Arithmetic mean of `percentagemUtilizacao` across simulations.
    pub utilizacao_media: f64,
    pub utilizacao_volume_media: f64,
    pub utilizacao_cubagem_media: f64,
    /// One row per route, in upstream traversal order.
    pub rotas_resumo: Vec<RotaResumo>,
    /// One rollup per distinct vehicle-type label, in first-seen order.
    pub por_tipo_veiculo: Vec<TipoVeiculoResumo>,
}

/// Denormalized per-route row carrying the parent simulation's id and
/// date alongside the route's own fields.
///
/// Identification fields are copied from the raw input verbatim
/// (whatever type the upstream sent); only the numeric measures go
/// through the normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotaResumo {
    pub simulacao_id: Value,
    pub data: Value,
    pub nome_rota: Value,
    pub route_id: Value,
    pub placa: Value,
    pub tipo_veiculo: Value,
    pub quantidade_entregas: Value,
    /// Count of this route's orders.
    pub quantidade_pedidos: usize,
    /// Sum of item counts across this route's orders.
    pub quantidade_itens: usize,
    #[serde(rename = "quantidadeKM")]
    pub quantidade_km: f64,
    pub peso_carga: f64,
    pub taxa_ocupacao: f64,
}

/// Accumulated totals for all routes sharing one vehicle-type label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipoVeiculoResumo {
    pub tipo_veiculo: String,
    pub rotas: usize,
    pub pedidos: usize,
    pub itens: usize,
    pub km_total: f64,
    pub peso_total: f64,
}

impl TipoVeiculoResumo {
    /// Empty rollup for a newly seen label.
    pub fn new(tipo_veiculo: impl Into<String>) -> Self {
        TipoVeiculoResumo {
            tipo_veiculo: tipo_veiculo.into(),
            rotas: 0,
            pedidos: 0,
            itens: 0,
            km_total: 0.0,
            peso_total: 0.0,
        }
    }
}

/// API request body for the /api/simulacoes endpoint.
///
/// All fields are optional at parse time so a partial or malformed body
/// degrades to "missing fields" instead of a deserialization error; the
/// handler rejects the request unless all four are present and non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulacoesRequest {
    /// Tenant base identifier used to build the upstream URL path.
    pub base: Option<String>,
    /// Upstream username, forwarded verbatim as a header.
    pub usuario: Option<String>,
    /// Upstream password, forwarded verbatim as a header.
    pub senha: Option<String>,
    /// Target date for the simulations (ISO-ish string).
    pub data: Option<String>,
}

impl SimulacoesRequest {
    /// Returns the four fields when all are present and non-empty.
    pub fn require_fields(&self) -> Option<(&str, &str, &str, &str)> {
        match (&self.base, &self.usuario, &self.senha, &self.data) {
            (Some(base), Some(usuario), Some(senha), Some(data))
                if !base.is_empty()
                    && !usuario.is_empty()
                    && !senha.is_empty()
                    && !data.is_empty() =>
            {
                Some((base.as_str(), usuario.as_str(), senha.as_str(), data.as_str()))
            }
            _ => None,
        }
    }
}
