//! 成绩单 PDF 导出
//!
//! 单页 A4，固定五列：Vorname、Nachname、HV-Punkte、LV-Punkte、Gesamtnote。
//! 不做分页，记录过多时超出页面的行不会显示。

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

use crate::models::evaluations::entities::EvaluationRecord;
use crate::utils::format_points;

pub const HEADERS: [&str; 5] = ["Vorname", "Nachname", "HV-Punkte", "LV-Punkte", "Gesamtnote"];

const MM: f32 = 72.0 / 25.4;

pub struct GradeSheetPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_id: Ref,
    content_id: Ref,

    page_h: f32,
    margin: f32,
    col_w: f32,
    row_h: f32,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for GradeSheetPdf {
    fn default() -> Self {
        Self::new()
    }
}

impl GradeSheetPdf {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let regular_font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let page_id = Ref::new(5);
        let content_id = Ref::new(6);

        // WinAnsi 编码覆盖德语变音字母
        pdf.type1_font(regular_font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        let page_w = 595.0;
        let page_h = 842.0;

        {
            let mut page = pdf.page(page_id);
            page.parent(pages_id)
                .media_box(Rect::new(0.0, 0.0, page_w, page_h))
                .contents(content_id);
            page.resources()
                .fonts()
                .pair(Name(b"F1"), regular_font_id)
                .pair(Name(b"F2"), bold_font_id);
        }

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_id,
            content_id,

            page_h,
            margin: 10.0 * MM,
            col_w: 30.0 * MM,
            row_h: 10.0 * MM,

            font_size: 11.0,
            header_font_size: 12.0,
            title_font_size: 14.0,
        }
    }

    /// 渲染标题、表头和每条记录一行，返回 PDF 字节
    pub fn render(mut self, title: &str, records: &[EvaluationRecord]) -> Vec<u8> {
        let mut content = Content::new();

        self.draw_text(
            &mut content,
            Name(b"F2"),
            self.margin,
            self.page_h - self.margin - self.title_font_size,
            self.title_font_size,
            title,
        );

        let mut y = self.page_h - 2.0 * self.margin - self.row_h;

        content.save_state();
        content.set_fill_rgb(0.85, 0.87, 0.90);
        content.rect(self.margin, y, self.col_w * HEADERS.len() as f32, self.row_h);
        content.fill_nonzero();
        content.restore_state();

        let header_row: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
        self.draw_row(&mut content, y, &header_row, Name(b"F2"), self.header_font_size);

        for record in records {
            y -= self.row_h;
            self.draw_row(
                &mut content,
                y,
                &table_row(record),
                Name(b"F1"),
                self.font_size,
            );
        }

        self.pdf.stream(self.content_id, &content.finish());
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf
            .pages(self.pages_id)
            .kids([self.page_id])
            .count(1);

        self.pdf.finish()
    }

    fn draw_text(
        &self,
        content: &mut Content,
        font: Name<'_>,
        x: f32,
        y: f32,
        size: f32,
        text: &str,
    ) {
        let encoded = encode_win_ansi(text);
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&encoded));
        content.end_text();
    }

    fn draw_row(&self, content: &mut Content, y: f32, row: &[String], font: Name<'_>, size: f32) {
        let mut x = self.margin;
        for cell in row {
            self.draw_text(content, font, x + 4.0, y + (self.row_h - size) / 2.0 + 2.0, size, cell);
            content.save_state();
            content.set_stroke_rgb(0.0, 0.0, 0.0);
            content.rect(x, y, self.col_w, self.row_h);
            content.stroke();
            content.restore_state();
            x += self.col_w;
        }
    }
}

/// 一条记录在 PDF 表格中的单元格内容
pub fn table_row(record: &EvaluationRecord) -> Vec<String> {
    vec![
        record.first_name.clone(),
        record.last_name.clone(),
        format_points(record.hv_points),
        format_points(record.lv_points),
        record.overall_grade.to_string(),
    ]
}

/// 标准 Type1 字体只支持单字节编码，WinAnsi 之外的字符替换为 `?`
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch as u32 {
            code @ 0x20..=0x7e | code @ 0xa0..=0xff => code as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(first_name: &str, last_name: &str) -> EvaluationRecord {
        EvaluationRecord {
            id: 1,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            hv_points: 25.0,
            hv_percent: 50.0,
            hv_grade: 4,
            lv_points: 15.5,
            lv_percent: 51.67,
            lv_grade: 4,
            overall_percent: 50.67,
            overall_grade: 4,
            counted: true,
        }
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_table_row_columns() {
        assert_eq!(
            table_row(&record("Anna", "Muster")),
            vec!["Anna", "Muster", "25.00", "15.50", "4"]
        );
    }

    #[test]
    fn test_render_contains_header_and_rows() {
        let records = vec![record("Anna", "Muster"), record("Ben", "Kurz")];
        let bytes = GradeSheetPdf::new().render("Englischarbeit", &records);

        assert!(bytes.starts_with(b"%PDF-"));
        for header in HEADERS {
            assert!(contains(&bytes, header.as_bytes()), "{header}");
        }
        assert!(contains(&bytes, b"(Muster)"));
        assert!(contains(&bytes, b"(Kurz)"));
        assert!(contains(&bytes, b"(15.50)"));
        assert!(contains(&bytes, b"/Count 1"));
    }

    #[test]
    fn test_render_empty_has_header_only() {
        let bytes = GradeSheetPdf::new().render("Englischarbeit", &[]);
        assert!(contains(&bytes, b"Gesamtnote"));
        assert!(!contains(&bytes, b"(Muster)"));
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("Müller"), vec![b'M', 0xfc, b'l', b'l', b'e', b'r']);
        assert_eq!(encode_win_ansi("Łukasz"), b"?ukasz".to_vec());
    }
}
