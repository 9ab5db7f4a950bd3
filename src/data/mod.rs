//! Test data generation for the summary pipeline.
//!
//! Generates simulation payloads shaped like the routing service's real
//! responses, including its loose typing: numeric fields come back as
//! plain numbers or Brazilian locale strings (`"1.234,56"`), and some
//! fields are simply absent. Uses seeded RNG for reproducible datasets
//! across runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Map, Value};

/// Vehicle-type labels seen in production tenants.
const VEHICLE_TYPES: [&str; 4] = ["Van", "Truck", "VUC", "Moto"];

/// Data seed for reproducible generation.
const DATA_SEED: u64 = 42;

/// Format a number the way the upstream does: `.` for thousands,
/// `,` for decimals.
fn locale_number(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (formatted.as_str(), "00"),
    };
    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("{grouped},{frac_part}")
}

/// Emit a numeric field the way the upstream might: as a JSON number
/// or as a locale-formatted string, roughly half and half.
fn loose_number(rng: &mut StdRng, value: f64) -> Value {
    if rng.gen_bool(0.5) {
        json!(locale_number(value))
    } else {
        json!((value * 100.0).round() / 100.0)
    }
}

/// Generate a batch of raw simulations as the upstream would return
/// them: a JSON array of loosely-typed objects.
pub fn generate_simulations(count: usize) -> Value {
    let mut rng = StdRng::seed_from_u64(DATA_SEED);
    let mut simulacoes = Vec::with_capacity(count);

    for i in 0..count {
        let num_rotas = rng.gen_range(1..=4);
        let mut rotas = Vec::with_capacity(num_rotas);

        for r in 0..num_rotas {
            let num_pedidos = rng.gen_range(0..=3);
            let mut pedidos = Vec::with_capacity(num_pedidos);
            for _ in 0..num_pedidos {
                let num_itens = rng.gen_range(1..=5);
                let itens: Vec<Value> = (0..num_itens)
                    .map(|n| json!({ "sku": format!("SKU-{:04}", rng.gen_range(0..10000)), "quantidade": n + 1 }))
                    .collect();
                pedidos.push(json!({ "itens": itens }));
            }

            let mut rota = Map::new();
            rota.insert("routeId".into(), json!(format!("rt_{:03}", i * 10 + r)));
            rota.insert("nomeRota".into(), json!(format!("Rota {}", r + 1)));
            rota.insert(
                "placa".into(),
                json!(format!("ABC{:04}", rng.gen_range(0..10000))),
            );
            // Some routes come back with no vehicle type at all.
            if rng.gen_bool(0.85) {
                let tipo = VEHICLE_TYPES[rng.gen_range(0..VEHICLE_TYPES.len())];
                rota.insert("tipoVeiculo".into(), json!(tipo));
            }
            rota.insert("quantidadeEntregas".into(), json!(num_pedidos));
            let km = rng.gen_range(5.0..250.0);
            rota.insert("quantidadeKM".into(), loose_number(&mut rng, km));
            let peso = rng.gen_range(100.0..5000.0);
            rota.insert("pesoCarga".into(), loose_number(&mut rng, peso));
            let ocupacao = rng.gen_range(30.0..100.0);
            rota.insert("taxaOcupacao".into(), loose_number(&mut rng, ocupacao));
            rota.insert("pedidos".into(), json!(pedidos));
            rotas.push(Value::Object(rota));
        }

        let day = (i % 28) + 1;
        let numero_pedidos = rng.gen_range(5.0..60.0_f64).round();
        let numero_visitas = rng.gen_range(5.0..80.0_f64).round();
        let peso_total = rng.gen_range(500.0..20000.0);
        let volume_total = rng.gen_range(10.0..400.0);
        let cubagem_total = rng.gen_range(10.0..400.0);
        let km_total = rng.gen_range(50.0..900.0);
        let media_km = rng.gen_range(1.0..40.0);
        let utilizacao = rng.gen_range(40.0..100.0);
        let utilizacao_volume = rng.gen_range(40.0..100.0);
        let utilizacao_cubagem = rng.gen_range(40.0..100.0);

        simulacoes.push(json!({
            "id": i + 1,
            "data": format!("2024-05-{day:02}"),
            "numeroPedidos": loose_number(&mut rng, numero_pedidos),
            "numeroVisitas": loose_number(&mut rng, numero_visitas),
            "numeroVeiculos": num_rotas,
            "pesoTotal": loose_number(&mut rng, peso_total),
            "volumeTotal": loose_number(&mut rng, volume_total),
            "cubagemTotal": loose_number(&mut rng, cubagem_total),
            "quantidadeKM": loose_number(&mut rng, km_total),
            "mediaKmPercorridaEntrega": loose_number(&mut rng, media_km),
            "percentagemUtilizacao": loose_number(&mut rng, utilizacao),
            "percentagemUtilizacaoVolume": loose_number(&mut rng, utilizacao_volume),
            "percentagemUtilizacaoCubagem": loose_number(&mut rng, utilizacao_cubagem),
            "rotas": rotas,
        }));
    }

    Value::Array(simulacoes)
}

/// The canonical sample dataset used by `generate_outputs` and demos.
/// Always returns the same data (seeded RNG).
pub fn sample_dataset() -> Value {
    generate_simulations(8)
}
