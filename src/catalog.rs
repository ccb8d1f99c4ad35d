//! Reference catalog of known newspaper and library codes.
//!
//! Codes found in filenames are not required to appear here; lookups for an
//! unknown code fall back to `Unknown (CODE)` via [`newspaper_display_name`]
//! and [`library_display_name`].

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

/// Descriptive metadata for a newspaper title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewspaperInfo {
    /// Full title with transliteration
    pub name: &'static str,
    /// Region of publication (e.g. `PRC`, `India`)
    pub region: &'static str,
    /// Publishing body (e.g. `State`, `CTA`)
    pub publisher: &'static str,
    /// Publication type (e.g. `General`, `Political`)
    pub publication_type: &'static str,
    /// Administrative level, for PRC titles
    pub level: Option<&'static str>,
    /// Province, for PRC titles
    pub province: Option<&'static str>,
}

const fn paper(
    name: &'static str,
    region: &'static str,
    publisher: &'static str,
    publication_type: &'static str,
) -> NewspaperInfo {
    NewspaperInfo {
        name,
        region,
        publisher,
        publication_type,
        level: None,
        province: None,
    }
}

const fn prc_paper(
    name: &'static str,
    publisher: &'static str,
    publication_type: &'static str,
    level: &'static str,
    province: Option<&'static str>,
) -> NewspaperInfo {
    NewspaperInfo {
        name,
        region: "PRC",
        publisher,
        publication_type,
        level: Some(level),
        province,
    }
}

lazy_static! {
    static ref NEWSPAPERS: HashMap<&'static str, NewspaperInfo> = {
        let mut map = HashMap::new();
        map.insert("CWN", paper("Central Weekly News (krung dbyang gsar 'gyur)", "India", "KMT", "Political"));
        map.insert("DTF", paper("Defend Tibet's Freedom (rang dbang srung skyob gsar shog)", "India", "CTA", "Political"));
        map.insert("FRD", paper("Freedom (rang dbang gsar shog)", "India", "CTA", "General"));
        map.insert("GDN", prc_paper("Ganze Daily (dkar mdzes nyin re'i gsar 'gyur)", "State", "General", "Prefectural", Some("Sichuan")));
        map.insert("GOT", paper("Understanding (go rtogs)", "Nepal", "Guerrilla", "Military"));
        map.insert("GTN", prc_paper("Gyantse News (rgyal rtse gsar 'gyur)", "State", "General", "County", Some("TAR")));
        map.insert("KDN", prc_paper("Kangding News (dar mdo'i gsar 'gyur)", "State", "General", "Prefectural", Some("Xikang/Sichuan")));
        map.insert("MJN", prc_paper("Minjiang News (min kyang tshags dpar)", "State", "General", "Prefectural", Some("Sichuan")));
        map.insert("NIB", prc_paper("News in Brief (gsar 'gyur mdor bsdus)", "State", "General", "Provincial", Some("TAR")));
        map.insert("QTN", prc_paper("Qinghai Tibetan News (mtsho sngon bod yig gsar 'gyur)", "State", "General", "Provincial", Some("Qinghai")));
        map.insert("SGN", prc_paper("South Gansu News (kan lho gsar 'gyur)", "State", "General", "Prefectural", Some("Gansu")));
        map.insert("TDP", prc_paper("Tibet Daily Pictorial (bod ljongs nyin re'i gsar 'gyur par ris)", "State", "Pictorial", "Provincial", Some("TAR")));
        map.insert("TID", prc_paper("Tibet Daily (bod ljongs nyin re'i gsar 'gyur)", "State", "General", "Provincial", Some("TAR")));
        map.insert("TIF", paper("Tibetan Freedom (bod mi'i rang dbang)", "India", "CTA", "General"));
        map.insert("TIM", paper("Tibet Mirror (yul phyog so so'i gsar 'gyur me long)", "India", "Independent", "General"));
        map.insert("XNX", prc_paper("South-West Institute for Nationalities (lho nub mi rigs slob grwa chen po)", "Educational", "Institutional", "Institutional", None));
        map.insert("ZYX", prc_paper("Central Institute for Nationalities (krung dbyang mi rigs slob grwa)", "Educational", "Institutional", "Institutional", None));
        map
    };

    static ref LIBRARIES: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        map.insert("BD", "Bodleian Library, Oxford");
        map.insert("BL", "British Library, London");
        map.insert("CF", "Collège de France, Paris");
        map.insert("CU", "Columbia University, New York");
        map.insert("IT", "University of Vienna");
        map.insert("LT", "Library of Tibetan Works and Archives");
        map.insert("MV", "Grassi Museum für Völkerkunde, Leipzig");
        map.insert("NC", "National Chengchi University, Taipei");
        map.insert("OI", "Oriental Institute, Prague");
        map.insert("RB", "Private Collection (Robbie Barnett)");
        map.insert("SB", "Staatsbibliothek zu Berlin");
        map.insert("TL", "LTWA, Dharamshala");
        map.insert("TM", "Tibet Museum");
        map.insert("TS", "Private Collection (Tenzin Sonam)");
        map.insert("UW", "University of Washington");
        map
    };
}

/// Metadata for a known newspaper code.
#[must_use]
pub fn newspaper_info(code: &str) -> Option<&'static NewspaperInfo> {
    NEWSPAPERS.get(code)
}

/// Full name of a known library code.
#[must_use]
pub fn library_name(code: &str) -> Option<&'static str> {
    LIBRARIES.get(code).copied()
}

/// Newspaper title, or `Unknown (CODE)` for codes not in the catalog.
#[must_use]
pub fn newspaper_display_name(code: &str) -> String {
    newspaper_info(code).map_or_else(|| format!("Unknown ({code})"), |info| info.name.to_string())
}

/// Library name, or `Unknown (CODE)` for codes not in the catalog.
#[must_use]
pub fn library_display_name(code: &str) -> String {
    library_name(code).map_or_else(|| format!("Unknown ({code})"), str::to_string)
}
