use crate::application::use_cases::batch_assembler::assemble_batch;
use crate::domain::property::BatchResult;
use crate::infrastructure::csv::CsvParser;
use crate::infrastructure::hubspot::PropertySink;
use actix_cors::Cors;
use actix_web::{dev::Server, post, web, App, HttpResponse, HttpServer, Responder};
use std::sync::Arc;

pub struct HttpState {
    pub sink: Arc<dyn PropertySink>,
}

/// Upload a property-definition CSV and create the batch on HubSpot.
///
/// The body is the raw CSV byte stream. Every row is validated and
/// submitted, coerced defaults included; the response carries the
/// collected validation errors next to HubSpot's own status and body.
#[post("/createProperty")]
async fn create_property(data: web::Data<HttpState>, body: web::Bytes) -> impl Responder {
    let rows = match CsvParser::new().parse_bytes(&body) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("CSV upload rejected: {}", e);
            return HttpResponse::BadRequest().body(e.to_string());
        }
    };

    let (request, errors) = assemble_batch(&rows);

    for (row, record) in rows.iter().zip(&request.inputs) {
        tracing::info!(
            "Linha {}: type={}, fieldType={}, name={}",
            row.line(),
            record.property_type.as_str(),
            record.field_type.as_str(),
            record.name
        );
    }

    if !errors.is_empty() {
        tracing::warn!("{} erro(s) de validação encontrados", errors.len());
        for erro in &errors {
            tracing::warn!("  - {}", erro);
        }
    }

    tracing::info!("Enviando {} propriedade(s) para o HubSpot", request.inputs.len());

    match data.sink.batch_create(&request).await {
        Ok(response) => HttpResponse::Ok().json(BatchResult {
            validacao_erros: errors.iter().map(|e| e.to_string()).collect(),
            hubspot_status_code: response.status_code,
            hubspot_response: response.body,
        }),
        Err(e) => {
            tracing::error!("Batch create failed: {}", e);
            HttpResponse::BadGateway().body(e.to_string())
        }
    }
}

pub fn start_server(sink: Arc<dyn PropertySink>, host: &str, port: u16) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState { sink });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for local tool

        App::new().wrap(cors).app_data(state.clone()).service(create_property)
    })
    .bind((host, port))?
    .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::Result;
    use crate::domain::property::BatchRequest;
    use crate::infrastructure::hubspot::BatchCreateResponse;
    use actix_web::test;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    struct StubSink {
        status_code: u16,
        body: Value,
        seen: Mutex<Option<BatchRequest>>,
    }

    impl StubSink {
        fn new(status_code: u16, body: Value) -> Self {
            Self {
                status_code,
                body,
                seen: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl PropertySink for StubSink {
        async fn batch_create(&self, request: &BatchRequest) -> Result<BatchCreateResponse> {
            *self.seen.lock().unwrap() = Some(request.clone());
            Ok(BatchCreateResponse {
                status_code: self.status_code,
                body: self.body.clone(),
            })
        }
    }

    #[actix_web::test]
    async fn test_create_property_end_to_end() {
        let sink = Arc::new(StubSink::new(201, json!({"status": "COMPLETE"})));
        let state = web::Data::new(HttpState { sink: sink.clone() });
        let app =
            test::init_service(App::new().app_data(state).service(create_property)).await;

        // One valid row, one bad fieldType, one enumeration with broken options
        let csv = "label,type,fieldType,groupName,options\n\
                   Nome Completo,string,text,,\n\
                   Idade,number,slider,,\n\
                   Estado,enumeration,select,,{not json\n";

        let req = test::TestRequest::post()
            .uri("/createProperty")
            .set_payload(csv)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let erros = body["validacao_erros"].as_array().unwrap();
        assert_eq!(erros.len(), 2);
        assert!(erros[0].as_str().unwrap().starts_with("Linha 3: fieldType inválido"));
        assert_eq!(erros[1], "Linha 4: options com JSON inválido");
        assert_eq!(body["hubspot_status_code"], 201);
        assert_eq!(body["hubspot_response"]["status"], "COMPLETE");

        // All three rows were submitted, bad fields coerced
        let seen = sink.seen.lock().unwrap();
        let request = seen.as_ref().unwrap();
        assert_eq!(request.inputs.len(), 3);
        assert_eq!(request.inputs[0].name, "nome_completo");
        assert_eq!(request.inputs[1].field_type.as_str(), "text");
        assert_eq!(request.inputs[2].options, None);
    }

    #[actix_web::test]
    async fn test_hubspot_failure_status_is_passed_through() {
        let sink = Arc::new(StubSink::new(400, json!({"message": "Invalid input"})));
        let state = web::Data::new(HttpState { sink });
        let app =
            test::init_service(App::new().app_data(state).service(create_property)).await;

        let csv = "label,type,fieldType\nNome,string,text\n";
        let req = test::TestRequest::post()
            .uri("/createProperty")
            .set_payload(csv)
            .to_request();
        let resp = test::call_service(&app, req).await;

        // The endpoint itself succeeds; HubSpot's rejection lives in the body
        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["hubspot_status_code"], 400);
        assert_eq!(body["hubspot_response"]["message"], "Invalid input");
        assert_eq!(body["validacao_erros"].as_array().unwrap().len(), 0);
    }

    #[actix_web::test]
    async fn test_empty_csv_sends_empty_batch() {
        let sink = Arc::new(StubSink::new(201, json!({"results": []})));
        let state = web::Data::new(HttpState { sink: sink.clone() });
        let app =
            test::init_service(App::new().app_data(state).service(create_property)).await;

        let req = test::TestRequest::post()
            .uri("/createProperty")
            .set_payload("label,type,fieldType\n")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["validacao_erros"].as_array().unwrap().len(), 0);
        let seen = sink.seen.lock().unwrap();
        assert_eq!(seen.as_ref().unwrap().inputs.len(), 0);
    }
}
