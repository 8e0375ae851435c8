//! Bilingual label catalog. Every user-facing string lives here, keyed by a
//! typed label so the compiler checks both languages stay complete.

use crate::domain::evaluation::Band;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
        }
    }

    /// Accepts the short code or the full name, case-insensitively.
    pub fn parse(code: &str) -> Option<Language> {
        match code.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "es" | "spanish" | "español" | "espanol" => Some(Language::Spanish),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    Title,
    Subtitle,
    Products,
    AddProduct,
    RemoveProduct,
    Name,
    Price,
    Units,
    VariableCosts,
    Materials,
    Shipping,
    Fees,
    FixedCosts,
    Rent,
    Internet,
    Advertising,
    Other,
    Results,
    Revenue,
    Expenses,
    Profit,
    Margin,
    Profitable,
    NotProfitable,
    Export,
    ExportDone,
    ExportFailed,
    Disclaimer,
    Access,
    Password,
    Enter,
    WrongPassword,
    NavCalculator,
    NavSettings,
    Levels,
    ExportDestination,
    Version,
    LockSession,
    SessionLocked,
    // Spreadsheet column headers and summary row names
    ColProduct,
    ColPrice,
    ColUnits,
    ColRevenue,
    ColUnitVariableCost,
    ColConcept,
    ColAmount,
    RowRevenue,
    RowVariableCosts,
    RowFixedCosts,
    RowProfit,
    RowMargin,
    SheetProducts,
    SheetSummary,
}

pub fn text(language: Language, label: Label) -> &'static str {
    match label {
        Label::Title => pick(language, "📊 Profitability Calculator", "📊 Calculadora de Rentabilidad"),
        Label::Subtitle => pick(
            language,
            "Calculate real profits including all expenses",
            "Calcula ganancias reales considerando todos tus gastos",
        ),
        Label::Products => pick(language, "1️⃣ Products / Services", "1️⃣ Productos / Servicios"),
        Label::AddProduct => pick(language, "➕ Add", "➕ Agregar"),
        Label::RemoveProduct => pick(language, "🗑 Remove", "🗑 Eliminar"),
        Label::Name => pick(language, "Name Product/Service", "Nombre Producto/Servicio"),
        Label::Price => pick(language, "Selling price", "Precio de venta"),
        Label::Units => pick(language, "Units sold per month", "Unidades vendidas al mes"),
        Label::VariableCosts => pick(language, "Variable costs per unit", "Costos variables por unidad"),
        Label::Materials => pick(language, "Raw materials", "Materia prima"),
        Label::Shipping => pick(language, "Shipping", "Envío"),
        Label::Fees => pick(language, "Fees", "Comisiones"),
        Label::FixedCosts => pick(language, "2️⃣ Monthly fixed costs", "2️⃣ Costos fijos mensuales"),
        Label::Rent => pick(language, "Rent", "Arriendo"),
        Label::Internet => pick(language, "Internet", "Internet"),
        Label::Advertising => pick(language, "Advertising", "Publicidad"),
        Label::Other => pick(language, "Other expenses", "Otros gastos"),
        Label::Results => pick(language, "3️⃣ Results", "3️⃣ Resultados"),
        Label::Revenue => pick(language, "Total revenue", "Ingresos totales"),
        Label::Expenses => pick(language, "Total expenses", "Gastos totales"),
        Label::Profit => pick(language, "Profit / Loss", "Ganancia / Pérdida"),
        Label::Margin => pick(language, "Margin (%)", "Margen (%)"),
        Label::Profitable => pick(
            language,
            "🟢 Your business IS profitable",
            "🟢 Tu negocio ES rentable",
        ),
        Label::NotProfitable => pick(
            language,
            "🔴 Your business is NOT profitable",
            "🔴 Tu negocio NO es rentable",
        ),
        Label::Export => pick(language, "📥 Export spreadsheet", "📥 Exportar hoja de cálculo"),
        Label::ExportDone => pick(language, "Spreadsheet exported to", "Hoja de cálculo exportada a"),
        Label::ExportFailed => pick(language, "Export failed", "Error al exportar"),
        Label::Disclaimer => pick(
            language,
            "Indicative tool. Does not replace financial advice.",
            "Herramienta orientativa. No reemplaza asesoría financiera.",
        ),
        Label::Access => pick(language, "🔐 Access", "🔐 Acceso"),
        Label::Password => pick(language, "Password", "Contraseña"),
        Label::Enter => pick(language, "Enter", "Entrar"),
        Label::WrongPassword => pick(language, "Incorrect Password", "Contraseña incorrecta"),
        Label::NavCalculator => pick(language, "Calculator", "Calculadora"),
        Label::NavSettings => pick(language, "Settings", "Ajustes"),
        Label::Levels => pick(language, "📈 Profitability levels", "📈 Niveles de rentabilidad"),
        Label::ExportDestination => pick(language, "Export destination", "Destino de exportación"),
        Label::Version => pick(language, "Version", "Versión"),
        Label::LockSession => pick(language, "🔒 Lock session", "🔒 Bloquear sesión"),
        Label::SessionLocked => pick(language, "Session locked", "Sesión bloqueada"),
        Label::ColProduct => pick(language, "Product / Service", "Producto / Servicio"),
        Label::ColPrice => pick(language, "Price", "Precio"),
        Label::ColUnits => pick(language, "Units", "Unidades"),
        Label::ColRevenue => pick(language, "Revenue", "Ingresos"),
        Label::ColUnitVariableCost => pick(language, "Variable cost per unit", "Costo variable unitario"),
        Label::ColConcept => pick(language, "Concept", "Concepto"),
        Label::ColAmount => pick(language, "Amount", "Monto"),
        Label::RowRevenue => pick(language, "Revenue", "Ingresos"),
        Label::RowVariableCosts => pick(language, "Variable costs", "Costos variables"),
        Label::RowFixedCosts => pick(language, "Fixed costs", "Costos fijos"),
        Label::RowProfit => pick(language, "Profit", "Ganancia"),
        Label::RowMargin => pick(language, "Margin %", "Margen %"),
        Label::SheetProducts => pick(language, "Products_EN", "Productos_ES"),
        Label::SheetSummary => pick(language, "Summary_EN", "Resumen_ES"),
    }
}

pub fn band_label(language: Language, band: Band) -> &'static str {
    match band {
        Band::Loss => pick(language, "Loss", "Pérdida"),
        Band::VeryLow => pick(language, "Very low (high risk)", "Muy bajo (riesgo alto)"),
        Band::Fragile => pick(language, "Profitable but fragile", "Rentable pero frágil"),
        Band::Healthy => pick(language, "Healthy", "Saludable"),
        Band::VeryProfitable => pick(language, "Very profitable", "Muy rentable"),
    }
}

fn pick(language: Language, en: &'static str, es: &'static str) -> &'static str {
    match language {
        Language::English => en,
        Language::Spanish => es,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_names() {
        assert_eq!(Language::parse("en"), Some(Language::English));
        assert_eq!(Language::parse("English"), Some(Language::English));
        assert_eq!(Language::parse("ES"), Some(Language::Spanish));
        assert_eq!(Language::parse("Español"), Some(Language::Spanish));
        assert_eq!(Language::parse(" espanol "), Some(Language::Spanish));
        assert_eq!(Language::parse("de"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[test]
    fn sheet_names_match_the_workbook_layout() {
        assert_eq!(text(Language::English, Label::SheetProducts), "Products_EN");
        assert_eq!(text(Language::Spanish, Label::SheetProducts), "Productos_ES");
        assert_eq!(text(Language::English, Label::SheetSummary), "Summary_EN");
        assert_eq!(text(Language::Spanish, Label::SheetSummary), "Resumen_ES");
    }

    #[test]
    fn band_labels_are_distinct_per_language() {
        use std::collections::HashSet;

        for language in Language::ALL {
            let labels: HashSet<_> = Band::ALL
                .iter()
                .map(|band| band_label(language, *band))
                .collect();
            assert_eq!(labels.len(), Band::ALL.len());
        }
    }
}
