//! Per-language keyword tables.
//!
//! Each supported spoken language contributes one [`KeywordTable`]: the
//! localized keywords for headers and steps, keyed by the name the grammar
//! registry looks it up under. Tables are intentionally lightweight and
//! `Copy`-friendly so the built-in set can live in `const` data.
//!
//! Registry keys are mostly ISO language codes; Swedish is keyed `se` for
//! historical compatibility (see [`crate::lang::fallback`]).

/// Keyword grammar for one spoken language.
///
/// Header keywords are matched followed by a `:`; step keywords are matched
/// as a prefix followed by whitespace (keywords ending in `'` need none).
/// The `*` bullet is listed under `and` in every table.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    /// Registry key this table is looked up under.
    pub key: &'static str,
    /// English name of the language.
    pub language: &'static str,
    /// Native name of the language.
    pub native: &'static str,
    pub feature: &'static [&'static str],
    pub background: &'static [&'static str],
    pub scenario: &'static [&'static str],
    pub scenario_outline: &'static [&'static str],
    pub examples: &'static [&'static str],
    pub given: &'static [&'static str],
    pub when: &'static [&'static str],
    pub then: &'static [&'static str],
    pub and: &'static [&'static str],
    pub but: &'static [&'static str],
}

pub const EN: KeywordTable = KeywordTable {
    key: "en",
    language: "English",
    native: "English",
    feature: &["Feature"],
    background: &["Background"],
    scenario: &["Scenario"],
    scenario_outline: &["Scenario Outline", "Scenario Template"],
    examples: &["Examples", "Scenarios"],
    given: &["Given"],
    when: &["When"],
    then: &["Then"],
    and: &["And", "*"],
    but: &["But"],
};

// Swedish: registered under the historical key.
pub const SE: KeywordTable = KeywordTable {
    key: "se",
    language: "Swedish",
    native: "Svenska",
    feature: &["Egenskap"],
    background: &["Bakgrund"],
    scenario: &["Scenario"],
    scenario_outline: &["Abstrakt Scenario", "Scenariomall"],
    examples: &["Exempel"],
    given: &["Givet"],
    when: &["När"],
    then: &["Så"],
    and: &["Och", "*"],
    but: &["Men"],
};

pub const DE: KeywordTable = KeywordTable {
    key: "de",
    language: "German",
    native: "Deutsch",
    feature: &["Funktionalität"],
    background: &["Grundlage"],
    scenario: &["Szenario"],
    scenario_outline: &["Szenariogrundriss"],
    examples: &["Beispiele"],
    given: &["Angenommen", "Gegeben sei"],
    when: &["Wenn"],
    then: &["Dann"],
    and: &["Und", "*"],
    but: &["Aber"],
};

pub const FR: KeywordTable = KeywordTable {
    key: "fr",
    language: "French",
    native: "Français",
    feature: &["Fonctionnalité"],
    background: &["Contexte"],
    scenario: &["Scénario"],
    scenario_outline: &["Plan du scénario", "Plan du Scénario"],
    examples: &["Exemples"],
    given: &["Soit", "Etant donné", "Étant donné"],
    when: &["Quand", "Lorsque", "Lorsqu'"],
    then: &["Alors"],
    and: &["Et", "*"],
    but: &["Mais"],
};

pub const ES: KeywordTable = KeywordTable {
    key: "es",
    language: "Spanish",
    native: "Español",
    feature: &["Característica"],
    background: &["Antecedentes"],
    scenario: &["Escenario"],
    scenario_outline: &["Esquema del escenario"],
    examples: &["Ejemplos"],
    given: &["Dado", "Dada", "Dados", "Dadas"],
    when: &["Cuando"],
    then: &["Entonces"],
    and: &["Y", "*"],
    but: &["Pero"],
};

pub const IT: KeywordTable = KeywordTable {
    key: "it",
    language: "Italian",
    native: "Italiano",
    feature: &["Funzionalità"],
    background: &["Contesto"],
    scenario: &["Scenario"],
    scenario_outline: &["Schema dello scenario"],
    examples: &["Esempi"],
    given: &["Dato", "Data", "Dati", "Date"],
    when: &["Quando"],
    then: &["Allora"],
    and: &["E", "*"],
    but: &["Ma"],
};

pub const PT: KeywordTable = KeywordTable {
    key: "pt",
    language: "Portuguese",
    native: "Português",
    feature: &["Funcionalidade"],
    background: &["Contexto"],
    scenario: &["Cenário", "Cenario"],
    scenario_outline: &["Esquema do Cenário", "Esquema do Cenario"],
    examples: &["Exemplos"],
    given: &["Dado", "Dada", "Dados", "Dadas"],
    when: &["Quando"],
    then: &["Então", "Entao"],
    and: &["E", "*"],
    but: &["Mas"],
};

pub const NL: KeywordTable = KeywordTable {
    key: "nl",
    language: "Dutch",
    native: "Nederlands",
    feature: &["Functionaliteit"],
    background: &["Achtergrond"],
    scenario: &["Scenario"],
    scenario_outline: &["Abstract Scenario"],
    examples: &["Voorbeelden"],
    given: &["Gegeven", "Stel"],
    when: &["Als"],
    then: &["Dan"],
    and: &["En", "*"],
    but: &["Maar"],
};

pub const DA: KeywordTable = KeywordTable {
    key: "da",
    language: "Danish",
    native: "Dansk",
    feature: &["Egenskab"],
    background: &["Baggrund"],
    scenario: &["Scenarie"],
    scenario_outline: &["Abstrakt Scenario"],
    examples: &["Eksempler"],
    given: &["Givet"],
    when: &["Når"],
    then: &["Så"],
    and: &["Og", "*"],
    but: &["Men"],
};

pub const NO: KeywordTable = KeywordTable {
    key: "no",
    language: "Norwegian",
    native: "Norsk",
    feature: &["Egenskap"],
    background: &["Bakgrunn"],
    scenario: &["Scenario"],
    scenario_outline: &["Scenariomal", "Abstrakt Scenario"],
    examples: &["Eksempler"],
    given: &["Gitt"],
    when: &["Når"],
    then: &["Så"],
    and: &["Og", "*"],
    but: &["Men"],
};

/// Every built-in table, in registration order.
pub const BUILTIN_TABLES: &[&KeywordTable] =
    &[&EN, &SE, &DE, &FR, &ES, &IT, &PT, &NL, &DA, &NO];
