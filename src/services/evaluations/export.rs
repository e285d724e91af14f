//! 成绩单导出服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use chrono::Local;
use tracing::{error, info};

use super::EvaluationService;
use crate::config::AppConfig;
use crate::export::GradeSheetPdf;
use crate::models::{ApiResponse, ErrorCode};

pub const DOWNLOAD_FILE_NAME: &str = "bewertung.pdf";

/// 导出全部记录为单页 PDF
pub async fn export_pdf(
    service: &EvaluationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let config = AppConfig::get();

    let records = match storage.list_evaluations().await {
        Ok(records) => records,
        Err(e) => {
            error!("导出成绩失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ExportFailed,
                    format!("Export failed: {e}"),
                )),
            );
        }
    };

    let title = format!(
        "{} - Stand {}",
        config.grading.exam_title,
        Local::now().format("%d.%m.%Y")
    );
    let bytes = GradeSheetPdf::new().render(&title, &records);

    if config.grading.write_export_copy {
        let path = config.grading.export_file_name.clone();
        let data = bytes.clone();
        let written = web::block(move || std::fs::write(&path, data)).await;
        match written {
            Ok(Ok(())) => info!(
                "Export copy written to {}",
                config.grading.export_file_name
            ),
            Ok(Err(e)) => {
                error!("Fehler beim Exportieren der Bewertungen: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::ExportFailed,
                        format!("Failed to write export copy: {e}"),
                    )),
                );
            }
            Err(e) => {
                error!("Export task failed: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::ExportFailed,
                        format!("Export task failed: {e}"),
                    )),
                );
            }
        }
    }

    info!("Exported {} evaluation(s) as PDF", records.len());

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{DOWNLOAD_FILE_NAME}\""),
        ))
        .body(bytes))
}
