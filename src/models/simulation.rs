use serde::Deserialize;
use serde_json::Value;

/// One day's routing run for a tenant, as returned by the upstream
/// routing service.
///
/// The upstream schema is untrusted: any field may be absent, a plain
/// number, or a locale-formatted string (`"1.234,56"`). Every field is
/// therefore kept as a raw `Value` and only interpreted at aggregation
/// time, through [`crate::numeric::safe_number`] for scalars and an
/// explicit as-array-or-empty fallback for the nested sequences.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSimulation {
    /// Simulation identifier (passed through to route rows verbatim).
    pub id: Value,
    /// Simulation date (passed through to route rows verbatim).
    pub data: Value,
    /// Reported order count for the whole simulation.
    pub numero_pedidos: Value,
    /// Reported visit count.
    pub numero_visitas: Value,
    /// Reported vehicle count.
    pub numero_veiculos: Value,
    /// Total cargo weight.
    pub peso_total: Value,
    /// Total cargo volume.
    pub volume_total: Value,
    /// Total cargo cubage.
    pub cubagem_total: Value,
    /// Total distance for the simulation.
    #[serde(rename = "quantidadeKM")]
    pub quantidade_km: Value,
    /// Average km driven per delivery.
    pub media_km_percorrida_entrega: Value,
    /// Capacity utilization percentage (0–100 nominally, not validated).
    pub percentagem_utilizacao: Value,
    /// Volume utilization percentage.
    pub percentagem_utilizacao_volume: Value,
    /// Cubage utilization percentage.
    pub percentagem_utilizacao_cubagem: Value,
    /// Routes of this simulation. Expected to be an array of route
    /// objects; anything else is treated as an empty sequence.
    pub rotas: Value,
}

/// One vehicle's planned path within a simulation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawRoute {
    pub route_id: Value,
    /// Display name of the route.
    pub nome_rota: Value,
    /// Vehicle plate.
    pub placa: Value,
    /// Free-text vehicle-type label; absent or empty maps to `"N/I"`.
    pub tipo_veiculo: Value,
    /// Reported delivery count (passed through verbatim).
    pub quantidade_entregas: Value,
    /// Route distance.
    #[serde(rename = "quantidadeKM")]
    pub quantidade_km: Value,
    /// Cargo weight on this route.
    pub peso_carga: Value,
    /// Occupancy rate.
    pub taxa_ocupacao: Value,
    /// Orders of this route; non-array treated as empty.
    pub pedidos: Value,
}

/// A delivery request within a route. Only the item count matters to
/// aggregation; item contents are opaque.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawOrder {
    /// Items of this order; non-array treated as empty.
    pub itens: Value,
}

impl RawSimulation {
    /// Total conversion from an arbitrary JSON value. A non-object
    /// element degrades to an all-absent simulation instead of failing.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

impl RawRoute {
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

impl RawOrder {
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

/// The sentinel label for routes with no usable vehicle type.
pub const UNKNOWN_VEHICLE_TYPE: &str = "N/I";

/// Normalize a raw `tipoVeiculo` value into a grouping key.
///
/// Only a non-empty string is a usable label; anything else (absent,
/// null, empty, mistyped) collapses to [`UNKNOWN_VEHICLE_TYPE`].
pub fn vehicle_type_label(raw: &Value) -> &str {
    match raw.as_str() {
        Some(s) if !s.is_empty() => s,
        _ => UNKNOWN_VEHICLE_TYPE,
    }
}

/// Read a raw value as an array slice, treating any non-array as empty.
pub fn as_sequence(raw: &Value) -> &[Value] {
    raw.as_array().map_or(&[], Vec::as_slice)
}
