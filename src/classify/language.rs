use super::UNKNOWN;

/// ISO 639-1 code to Spanish display name, covering the most spoken
/// languages plus digitally significant regional ones. Codes missing here
/// are echoed back uppercased rather than treated as unknown.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("ZH", "Chino Mandarín"),
    ("ES", "Español"),
    ("EN", "Inglés"),
    ("HI", "Hindi"),
    ("AR", "Árabe"),
    ("BN", "Bengalí"),
    ("PT", "Portugués"),
    ("RU", "Ruso"),
    ("JA", "Japonés"),
    ("PA", "Punjabi"),
    ("DE", "Alemán"),
    ("JV", "Javanés"),
    ("FR", "Francés"),
    ("TR", "Turco"),
    ("VI", "Vietnamita"),
    ("KO", "Coreano"),
    ("IT", "Italiano"),
    ("TH", "Tailandés"),
    ("GU", "Gujarati"),
    ("FA", "Persa"),
    ("PL", "Polaco"),
    ("UK", "Ucraniano"),
    ("ML", "Malayalam"),
    ("KN", "Canarés"),
    ("MR", "Maratí"),
    ("TE", "Télugu"),
    ("OR", "Oriya"),
    ("TA", "Tamil"),
    ("MY", "Birmano"),
    ("UR", "Urdu"),
    ("NL", "Neerlandés"),
    ("RO", "Rumano"),
    ("HU", "Húngaro"),
    ("CS", "Checo"),
    ("EL", "Griego"),
    ("SV", "Sueco"),
    ("FI", "Finés"),
    ("DA", "Danés"),
    ("SK", "Eslovaco"),
    ("HE", "Hebreo"),
    ("ID", "Indonesio"),
    ("MS", "Malayo"),
    ("TL", "Tagalo"),
    ("NE", "Nepalí"),
    ("SI", "Cingalés"),
    ("KM", "Jemer"),
    ("LO", "Lao"),
    ("KA", "Georgiano"),
    ("HY", "Armenio"),
    ("ET", "Estonio"),
    ("LV", "Letón"),
    ("LT", "Lituano"),
    ("CY", "Galés"),
    ("EU", "Euskera"),
    ("GL", "Gallego"),
];

/// Resolve the display name of the first language in an Accept-Language
/// header. Only the leading two-letter code matters; region and quality
/// subtags are ignored. A syntactically valid but unlisted code comes back
/// uppercased verbatim; an empty or unparseable header yields the sentinel.
pub fn language(accept_language: &str) -> String {
    let code: String = accept_language.chars().take(2).collect();
    if code.chars().count() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return UNKNOWN.to_string();
    }

    let code = code.to_ascii_uppercase();
    match LANGUAGE_NAMES.iter().find(|(c, _)| *c == code) {
        Some((_, name)) => (*name).to_string(),
        None => code,
    }
}
