/// Simulation aggregation engine.
///
/// Reduces the raw simulation collection returned by the routing
/// service into one [`Resumo`]: global totals, per-route rows, and
/// per-vehicle-type rollups. A pure, synchronous transform; it never
/// fails and never touches the network.
use std::collections::HashMap;

use serde_json::Value;

use crate::models::simulation::{
    as_sequence, vehicle_type_label, RawOrder, RawRoute, RawSimulation,
};
use crate::models::summary::{Resumo, RotaResumo, TipoVeiculoResumo};
use crate::numeric::safe_number;

/// Build the summary for a raw simulation collection.
///
/// A non-array or empty input returns the zero summary: every total is
/// `0`, every averaged field is `0` (the division never runs), and both
/// sequences are empty. Otherwise simulations, routes, and orders are
/// traversed in input order; `rotasResumo` preserves that order and
/// `porTipoVeiculo` lists labels in first-seen order.
pub fn summarize(raw: &Value) -> Resumo {
    let simulacoes = match raw.as_array() {
        Some(items) if !items.is_empty() => items,
        _ => return Resumo::default(),
    };

    let total_simulacoes = simulacoes.len();
    let mut resumo = Resumo {
        total_simulacoes,
        ..Resumo::default()
    };

    // Running sums for the averaged fields, divided once at the end.
    let mut soma_media_km = 0.0;
    let mut soma_utilizacao = 0.0;
    let mut soma_utilizacao_volume = 0.0;
    let mut soma_utilizacao_cubagem = 0.0;

    // First-seen-ordered rollups: the map only holds indexes into the
    // output Vec, so iteration order never depends on the hash.
    let mut tipo_index: HashMap<String, usize> = HashMap::new();

    for entry in simulacoes {
        let sim = RawSimulation::from_value(entry);
        let rotas = as_sequence(&sim.rotas);

        resumo.total_rotas += rotas.len();
        resumo.total_pedidos += safe_number(&sim.numero_pedidos);
        resumo.total_visitas += safe_number(&sim.numero_visitas);
        resumo.total_veiculos += safe_number(&sim.numero_veiculos);

        resumo.peso_total += safe_number(&sim.peso_total);
        resumo.volume_total += safe_number(&sim.volume_total);
        resumo.cubagem_total += safe_number(&sim.cubagem_total);
        resumo.km_total += safe_number(&sim.quantidade_km);

        soma_media_km += safe_number(&sim.media_km_percorrida_entrega);
        soma_utilizacao += safe_number(&sim.percentagem_utilizacao);
        soma_utilizacao_volume += safe_number(&sim.percentagem_utilizacao_volume);
        soma_utilizacao_cubagem += safe_number(&sim.percentagem_utilizacao_cubagem);

        for rota_raw in rotas {
            let rota = RawRoute::from_value(rota_raw);
            let pedidos = as_sequence(&rota.pedidos);
            let quantidade_pedidos = pedidos.len();

            let quantidade_itens: usize = pedidos
                .iter()
                .map(|pedido| as_sequence(&RawOrder::from_value(pedido).itens).len())
                .sum();
            resumo.total_itens += quantidade_itens;

            let quantidade_km = safe_number(&rota.quantidade_km);
            let peso_carga = safe_number(&rota.peso_carga);

            resumo.rotas_resumo.push(RotaResumo {
                simulacao_id: sim.id.clone(),
                data: sim.data.clone(),
                nome_rota: rota.nome_rota.clone(),
                route_id: rota.route_id.clone(),
                placa: rota.placa.clone(),
                tipo_veiculo: rota.tipo_veiculo.clone(),
                quantidade_entregas: rota.quantidade_entregas.clone(),
                quantidade_pedidos,
                quantidade_itens,
                quantidade_km,
                peso_carga,
                taxa_ocupacao: safe_number(&rota.taxa_ocupacao),
            });

            let chave = vehicle_type_label(&rota.tipo_veiculo);
            let idx = match tipo_index.get(chave) {
                Some(&idx) => idx,
                None => {
                    resumo
                        .por_tipo_veiculo
                        .push(TipoVeiculoResumo::new(chave));
                    let idx = resumo.por_tipo_veiculo.len() - 1;
                    tipo_index.insert(chave.to_string(), idx);
                    idx
                }
            };
            let rollup = &mut resumo.por_tipo_veiculo[idx];
            rollup.rotas += 1;
            rollup.pedidos += quantidade_pedidos;
            rollup.itens += quantidade_itens;
            rollup.km_total += quantidade_km;
            rollup.peso_total += peso_carga;
        }
    }

    // total_simulacoes > 0 here: the empty branch already returned.
    resumo.media_km_por_entrega = soma_media_km / total_simulacoes as f64;
    resumo.utilizacao_media = soma_utilizacao / total_simulacoes as f64;
    resumo.utilizacao_volume_media = soma_utilizacao_volume / total_simulacoes as f64;
    resumo.utilizacao_cubagem_media = soma_utilizacao_cubagem / total_simulacoes as f64;

    resumo
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_zero_summary(resumo: &Resumo) {
        assert_eq!(resumo.total_simulacoes, 0);
        assert_eq!(resumo.total_rotas, 0);
        assert_eq!(resumo.total_pedidos, 0.0);
        assert_eq!(resumo.total_visitas, 0.0);
        assert_eq!(resumo.total_veiculos, 0.0);
        assert_eq!(resumo.total_itens, 0);
        assert_eq!(resumo.peso_total, 0.0);
        assert_eq!(resumo.volume_total, 0.0);
        assert_eq!(resumo.cubagem_total, 0.0);
        assert_eq!(resumo.km_total, 0.0);
        assert_eq!(resumo.media_km_por_entrega, 0.0);
        assert_eq!(resumo.utilizacao_media, 0.0);
        assert_eq!(resumo.utilizacao_volume_media, 0.0);
        assert_eq!(resumo.utilizacao_cubagem_media, 0.0);
        assert!(resumo.rotas_resumo.is_empty());
        assert!(resumo.por_tipo_veiculo.is_empty());
    }

    #[test]
    fn test_empty_array_yields_zero_summary() {
        assert_zero_summary(&summarize(&json!([])));
    }

    #[test]
    fn test_non_array_inputs_yield_zero_summary() {
        assert_zero_summary(&summarize(&Value::Null));
        assert_zero_summary(&summarize(&json!("nope")));
        assert_zero_summary(&summarize(&json!({"simulacoes": []})));
        assert_zero_summary(&summarize(&json!(17)));
    }

    #[test]
    fn test_end_to_end_single_simulation() {
        let input = json!([{
            "id": 1,
            "data": "2024-01-01",
            "numeroPedidos": "10",
            "rotas": [{
                "nomeRota": "R1",
                "tipoVeiculo": "Van",
                "quantidadeKM": "12,5",
                "pesoCarga": 100,
                "pedidos": [{"itens": [1, 2]}, {"itens": [3]}]
            }]
        }]);

        let resumo = summarize(&input);
        assert_eq!(resumo.total_simulacoes, 1);
        assert_eq!(resumo.total_rotas, 1);
        assert_eq!(resumo.total_pedidos, 10.0);
        assert_eq!(resumo.total_itens, 3);

        let rota = &resumo.rotas_resumo[0];
        assert_eq!(rota.simulacao_id, json!(1));
        assert_eq!(rota.data, json!("2024-01-01"));
        assert_eq!(rota.quantidade_pedidos, 2);
        assert_eq!(rota.quantidade_itens, 3);
        assert_eq!(rota.quantidade_km, 12.5);
        assert_eq!(rota.peso_carga, 100.0);

        assert_eq!(
            resumo.por_tipo_veiculo,
            vec![TipoVeiculoResumo {
                tipo_veiculo: "Van".to_string(),
                rotas: 1,
                pedidos: 2,
                itens: 3,
                km_total: 12.5,
                peso_total: 100.0,
            }]
        );
    }

    #[test]
    fn test_reported_counts_are_summed_not_recomputed() {
        // numeroPedidos says 99 even though the routes hold 1 order;
        // the simulation-level totals trust the reported field.
        let input = json!([{
            "numeroPedidos": 99,
            "numeroVisitas": "7",
            "numeroVeiculos": 2,
            "rotas": [{"pedidos": [{"itens": []}]}]
        }]);
        let resumo = summarize(&input);
        assert_eq!(resumo.total_pedidos, 99.0);
        assert_eq!(resumo.total_visitas, 7.0);
        assert_eq!(resumo.total_veiculos, 2.0);
        assert_eq!(resumo.rotas_resumo[0].quantidade_pedidos, 1);
        assert_eq!(resumo.total_itens, 0);
    }

    #[test]
    fn test_averages_divide_by_simulation_count() {
        let input = json!([
            {"mediaKmPercorridaEntrega": 10, "percentagemUtilizacao": "80", "rotas": []},
            {"mediaKmPercorridaEntrega": "20,0", "percentagemUtilizacao": 60, "rotas": []},
        ]);
        let resumo = summarize(&input);
        assert_eq!(resumo.total_simulacoes, 2);
        assert_eq!(resumo.media_km_por_entrega, 15.0);
        assert_eq!(resumo.utilizacao_media, 70.0);
        // Fields absent from both simulations average to zero.
        assert_eq!(resumo.utilizacao_volume_media, 0.0);
    }

    #[test]
    fn test_rollups_partition_routes_in_first_seen_order() {
        let input = json!([
            {"rotas": [
                {"tipoVeiculo": "Truck", "quantidadeKM": 10},
                {"tipoVeiculo": "Van", "quantidadeKM": 5},
                {"quantidadeKM": 1}
            ]},
            {"rotas": [
                {"tipoVeiculo": "Van", "quantidadeKM": 7},
                {"tipoVeiculo": "", "quantidadeKM": 2}
            ]},
        ]);
        let resumo = summarize(&input);
        assert_eq!(resumo.total_rotas, 5);

        let labels: Vec<&str> = resumo
            .por_tipo_veiculo
            .iter()
            .map(|r| r.tipo_veiculo.as_str())
            .collect();
        assert_eq!(labels, vec!["Truck", "Van", "N/I"]);

        // Every route lands in exactly one rollup.
        let rotas_total: usize = resumo.por_tipo_veiculo.iter().map(|r| r.rotas).sum();
        assert_eq!(rotas_total, resumo.total_rotas);

        let van = &resumo.por_tipo_veiculo[1];
        assert_eq!(van.rotas, 2);
        assert_eq!(van.km_total, 12.0);
        let ni = &resumo.por_tipo_veiculo[2];
        assert_eq!(ni.rotas, 2);
        assert_eq!(ni.km_total, 3.0);
    }

    #[test]
    fn test_route_rows_preserve_traversal_order() {
        let input = json!([
            {"id": 1, "rotas": [{"nomeRota": "A"}, {"nomeRota": "B"}]},
            {"id": 2, "rotas": [{"nomeRota": "C"}]},
        ]);
        let resumo = summarize(&input);
        let nomes: Vec<&Value> = resumo.rotas_resumo.iter().map(|r| &r.nome_rota).collect();
        assert_eq!(nomes, vec![&json!("A"), &json!("B"), &json!("C")]);
        assert_eq!(resumo.rotas_resumo[2].simulacao_id, json!(2));
    }

    #[test]
    fn test_malformed_nested_shapes_are_tolerated() {
        let input = json!([
            {"rotas": "not an array", "pesoTotal": "abc"},
            {"rotas": [{"pedidos": {"itens": [1]}, "quantidadeKM": true}]},
            {"rotas": [{"pedidos": [{"itens": "x"}, "stray"]}]},
        ]);
        let resumo = summarize(&input);
        assert_eq!(resumo.total_simulacoes, 3);
        assert_eq!(resumo.total_rotas, 2);
        assert_eq!(resumo.total_itens, 0);
        assert_eq!(resumo.peso_total, 0.0);
        assert_eq!(resumo.rotas_resumo[0].quantidade_km, 0.0);
        assert_eq!(resumo.rotas_resumo[1].quantidade_pedidos, 2);
    }

    #[test]
    fn test_total_itens_sums_across_routes() {
        let input = json!([
            {"rotas": [
                {"pedidos": [{"itens": [1, 2, 3]}]},
                {"pedidos": [{"itens": [4]}, {"itens": [5, 6]}]}
            ]},
            {"rotas": [{"pedidos": [{"itens": []}]}]},
        ]);
        let resumo = summarize(&input);
        assert_eq!(resumo.total_itens, 6);
        assert_eq!(resumo.rotas_resumo[0].quantidade_itens, 3);
        assert_eq!(resumo.rotas_resumo[1].quantidade_itens, 3);
        assert_eq!(resumo.rotas_resumo[2].quantidade_itens, 0);
    }
}
