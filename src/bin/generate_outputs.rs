//! CLI tool to generate a sample dataset and its computed summary.
//!
//! Produces:
//! - `output/simulacoes_teste.json` — synthetic raw simulations in the
//!   upstream's loose wire format
//! - `output/resumo.json` — the summary the API would return for them

use simulacoes_api::data::sample_dataset;
use simulacoes_api::summary::summarize;

fn main() {
    let simulacoes = sample_dataset();
    let raw_json =
        serde_json::to_string_pretty(&simulacoes).expect("Failed to serialize simulations");
    std::fs::create_dir_all("output").expect("Failed to create output directory");
    std::fs::write("output/simulacoes_teste.json", &raw_json).expect("Failed to write simulations");
    let count = simulacoes.as_array().map_or(0, Vec::len);
    println!("Wrote output/simulacoes_teste.json ({count} simulations)");

    let resumo = summarize(&simulacoes);
    let resumo_json = serde_json::to_string_pretty(&resumo).expect("Failed to serialize summary");
    std::fs::write("output/resumo.json", &resumo_json).expect("Failed to write summary");

    println!("Wrote output/resumo.json");
    println!();
    println!("=== RESUMO ===");
    println!("Simulações:       {}", resumo.total_simulacoes);
    println!("Rotas:            {}", resumo.total_rotas);
    println!("Pedidos:          {}", resumo.total_pedidos);
    println!("Visitas:          {}", resumo.total_visitas);
    println!("Veículos:         {}", resumo.total_veiculos);
    println!("Itens:            {}", resumo.total_itens);
    println!("Peso total:       {:.2}", resumo.peso_total);
    println!("Volume total:     {:.2}", resumo.volume_total);
    println!("Cubagem total:    {:.2}", resumo.cubagem_total);
    println!("KM total:         {:.2}", resumo.km_total);
    println!("Média km/entrega: {:.2}", resumo.media_km_por_entrega);
    println!("Utilização média: {:.1}%", resumo.utilizacao_media);
    println!();
    println!("--- Por tipo de veículo ---");
    for tipo in &resumo.por_tipo_veiculo {
        println!(
            "  {}: {} rotas, {} pedidos, {} itens, {:.1} km, {:.1} kg",
            tipo.tipo_veiculo, tipo.rotas, tipo.pedidos, tipo.itens, tipo.km_total, tipo.peso_total
        );
    }
}
