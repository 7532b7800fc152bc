// Demo mode: bundled records to showcase the row layout
//
// Covers the cases worth eyeballing: short text, long wrapping text,
// CJK (double-width) characters and an empty field.
//
// Run with: translate-mate --demo

use crate::records::TranslationRecord;

/// Records shown when no records file is configured
pub fn demo_records() -> Vec<TranslationRecord> {
    vec![
        TranslationRecord::new("French", "Bonjour", "Hello"),
        TranslationRecord::new(
            "Spanish",
            "¿Podrías decirme dónde está la estación de tren más cercana? \
             Tengo que llegar al centro antes de las nueve.",
            "Could you tell me where the nearest train station is? \
             I need to get downtown before nine.",
        ),
        TranslationRecord::new("Japanese", "ありがとうございます", "Thank you very much"),
        TranslationRecord::new(
            "German",
            "Die Besprechung wurde auf Donnerstagnachmittag verschoben.",
            "The meeting has been moved to Thursday afternoon.",
        ),
        TranslationRecord::new("Arabic", "صباح الخير", "Good morning"),
        TranslationRecord::new("Italian", "", "This translation is still empty"),
    ]
}
