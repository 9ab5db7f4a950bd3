use serde_json::{json, Value};
use simulacoes_api::models::summary::SimulacoesRequest;
use simulacoes_api::summary::summarize;
use simulacoes_api::upstream::{fetch_simulations, FetchError};
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    run(handler).await
}

/// POST /api/simulacoes — fetch one day's routing simulations for a
/// tenant and return the aggregated summary.
///
/// The body must carry `base`, `usuario`, `senha`, and `data`. The
/// tenant base selects the upstream path; the credentials are forwarded
/// verbatim. Configuration problems map to 4xx, upstream failures keep
/// the upstream's own status, and transport failures map to 500.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::POST {
        return json_response(
            StatusCode::METHOD_NOT_ALLOWED,
            json!({ "mensagem": "Método não permitido. Use POST." }),
        );
    }

    // Tolerant parse: an unreadable body degrades to an empty request
    // and is rejected below as missing fields.
    let body: SimulacoesRequest =
        serde_json::from_slice(req.body().as_ref()).unwrap_or_default();

    let Some((base, usuario, senha, data)) = body.require_fields() else {
        let recebido: Value = serde_json::from_slice(req.body().as_ref()).unwrap_or(json!({}));
        return json_response(
            StatusCode::BAD_REQUEST,
            json!({
                "mensagem": "Informe base, usuario, senha e data.",
                "bodyRecebido": recebido,
            }),
        );
    };

    println!("Buscando simulações: base={base} data={data}");

    match fetch_simulations(base, usuario, senha, data).await {
        Ok(raw) => {
            let registros = raw.as_array().map_or(0, Vec::len);
            println!("Qtd registros retornados: {registros}");
            let resumo = summarize(&raw);
            json_response(StatusCode::OK, serde_json::to_value(&resumo)?)
        }
        Err(err @ FetchError::MissingBase) => json_response(
            StatusCode::BAD_REQUEST,
            json!({
                "mensagem": "Informe base, usuario, senha e data.",
                "detalhe": err.to_string(),
            }),
        ),
        Err(FetchError::Upstream { status, body }) => {
            eprintln!("Erro na API de simulações ({status}): {body}");
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            json_response(
                status,
                json!({
                    "mensagem": "Erro na API de simulações.",
                    "detalhe": body,
                }),
            )
        }
        Err(err) => {
            eprintln!("Erro interno ao processar simulações: {err}");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "mensagem": "Erro interno ao processar simulações.",
                    "detalhe": err.to_string(),
                }),
            )
        }
    }
}

fn json_response(status: StatusCode, payload: Value) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}
