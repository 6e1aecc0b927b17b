//! Long-form date formatting per locale ("January 1, 2024", "1 de enero de 2024").

use chrono::{Datelike, NaiveDate};

use super::Language;

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];
const MONTHS_PT: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];
const MONTHS_HI: [&str; 12] = [
    "जनवरी", "फ़रवरी", "मार्च", "अप्रैल", "मई", "जून", "जुलाई", "अगस्त", "सितंबर", "अक्तूबर",
    "नवंबर", "दिसंबर",
];
const MONTHS_ID: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];
const MONTHS_AR: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر", "أكتوبر",
    "نوفمبر", "ديسمبر",
];

/// Formats `date` as year, long month name and day in the order `language` uses.
/// Arabic uses the Gregorian calendar with Arabic-Indic digits.
pub fn format_long_date(date: NaiveDate, language: Language) -> String {
    let month = date.month0() as usize;
    let day = date.day();
    let year = date.year();
    match language {
        Language::En => format!("{} {}, {}", MONTHS_EN[month], day, year),
        Language::Es => format!("{} de {} de {}", day, MONTHS_ES[month], year),
        Language::Pt => format!("{} de {} de {}", day, MONTHS_PT[month], year),
        Language::Hi => format!("{} {} {}", day, MONTHS_HI[month], year),
        Language::Id => format!("{} {} {}", day, MONTHS_ID[month], year),
        Language::Ar => format!(
            "{} {} {}",
            arabic_indic(&day.to_string()),
            MONTHS_AR[month],
            arabic_indic(&year.to_string())
        ),
    }
}

fn arabic_indic(digits: &str) -> String {
    digits
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}
