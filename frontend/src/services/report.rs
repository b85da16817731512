//! HTTP transport for the report endpoints.
//!
//! Only performs the request and reads the body; decoding and status
//! rules live in [`RawReply::decode`](crate::types::RawReply::decode).

use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use crate::config::{Endpoints, UPLOAD_FIELD};
use crate::types::{AppError, AppResult, RawReply};
use crate::widget::ReportRequest;

/// Performs backend calls for the widget runtime.
#[allow(async_fn_in_trait)]
pub trait ReportTransport: Clone + 'static {
    /// Send `request`; an `Err` means no readable response was received.
    async fn send(&self, request: ReportRequest<File>) -> AppResult<RawReply>;
}

/// `fetch`-based transport.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    endpoints: Endpoints,
}

impl HttpTransport {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Multipart `POST` of a CSV file.
    pub async fn upload(&self, file: &File) -> AppResult<RawReply> {
        let form_data = FormData::new()
            .map_err(|e| AppError::Request(format!("Failed to create FormData: {:?}", e)))?;
        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(|e| AppError::Request(format!("Failed to append file: {:?}", e)))?;

        let url = self.endpoints.upload();
        log::debug!("POST {} ({} bytes)", url, file.size());
        let request = Request::post(&url)
            .body(form_data)
            .map_err(|e| AppError::Request(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        read_reply(response).await
    }

    /// `GET` of the sample report.
    pub async fn generate_sample(&self) -> AppResult<RawReply> {
        let url = self.endpoints.sample();
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        read_reply(response).await
    }
}

impl ReportTransport for HttpTransport {
    async fn send(&self, request: ReportRequest<File>) -> AppResult<RawReply> {
        match request {
            ReportRequest::Upload(file) => self.upload(&file).await,
            ReportRequest::Sample => self.generate_sample().await,
        }
    }
}

async fn read_reply(response: Response) -> AppResult<RawReply> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;
    log::debug!("Response {} ({} bytes)", status, body.len());
    Ok(RawReply::new(status, body))
}
