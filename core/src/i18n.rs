//! English and Polish UI strings.
//!
//! Lookups fall back Polish → English → the key itself, so a missing translation shows
//! up as a readable key instead of an empty label.

use phf::phf_map;
use pokedex_types::Language;
use pokedex_types::formatting::display_name;

static EN: phf::Map<&'static str, &'static str> = phf_map! {
    "nav.home" => "Home",
    "nav.pokedex" => "Pokédex",
    "nav.quiz" => "Quiz",
    "nav.themeToggle" => "Change theme",
    "nav.languageToggle" => "Change language",

    "theme.light" => "Light",
    "theme.dark" => "Dark",
    "theme.auto" => "Auto",

    "common.loading" => "Loading...",
    "common.cancel" => "Cancel",
    "common.error" => "Something went wrong",

    "home.title" => "Pokédex",
    "home.subtitle" => "Explore the original 151 Pokémon",
    "home.generation" => "Generation I",
    "home.exploreTitle" => "Browse the Pokédex",
    "home.exploreDescription" => "Search, filter by type and keep track of your favorites.",
    "home.exploreButton" => "Open Pokédex",
    "home.quizTitle" => "Who's that Pokémon?",
    "home.quizDescription" => "Guess the Pokémon from its silhouette and build a streak.",
    "home.quizButton" => "Start quiz",
    "home.poweredBy" => "Powered by PokeAPI",
    "nav.about" => "About",
    "about.title" => "About this Pokédex",
    "about.subtitle" => "A Generation 1 Pokédex with a silhouette quiz",
    "about.features" => "Features",
    "about.featuresDescription" => "What you can do here",
    "about.feature1Title" => "Fuzzy search",
    "about.feature1Desc" => "Find Pokémon by name even with a typo, then narrow the list by type or favorites.",
    "about.feature2Title" => "Silhouette quiz",
    "about.feature2Desc" => "Guess the Pokémon from its shadow and chase your best streak.",
    "about.feature3Title" => "Favorites and caught list",
    "about.feature3Desc" => "Mark the Pokémon you like or have caught. Both lists are saved on your device.",
    "about.feature4Title" => "Light and dark themes",
    "about.feature4Desc" => "Pick a theme or follow your system setting.",
    "about.feature5Title" => "Two languages",
    "about.feature5Desc" => "English and Polish, detected from your browser.",
    "about.techTitle" => "Technology",
    "about.techDescription" => "Written in Rust and compiled to WebAssembly",
    "about.creditsTitle" => "Credits",
    "about.dataSource" => "Data source",
    "about.dataSourceDesc" => "All Pokémon data comes from",
    "about.pokemon" => "Pokémon",
    "about.pokemonDesc" => "Pokémon and Pokémon character names are trademarks of Nintendo.",
    "about.builtBy" => "Built by",
    "about.builtByDesc" => "A fan project, not affiliated with Nintendo.",

    "pokedex.title" => "Pokédex",
    "pokedex.found" => "{{count}} Pokémon",
    "pokedex.search" => "Search Pokémon...",
    "pokedex.filterByType" => "Filter by type",
    "pokedex.allTypes" => "All types",
    "pokedex.favorites" => "Favorites",
    "pokedex.noFavorites" => "You have no favorites yet.",
    "pokedex.favoriteAdded" => "Added to favorites",
    "pokedex.favoriteRemoved" => "Removed from favorites",
    "pokedex.caughtMarked" => "Marked as caught",
    "pokedex.caughtUnmarked" => "No longer marked as caught",
    "pokedex.clearFilters" => "Clear filters",
    "pokedex.loading" => "Loading Pokémon...",
    "pokedex.error" => "Failed to load Pokémon",
    "pokedex.noResults" => "No Pokémon found",
    "pokedex.noResultsBase" => "I couldn't find any Pokémon",
    "pokedex.noResultsWithName" => "I couldn't find any Pokémon named {{query}}",
    "pokedex.noResultsFavoritesPrefix" => "In your favorites",
    "pokedex.noResultsTypeCondition" => "of type {{type}}",
    "pokedex.browseAll" => "Browse all Pokémon",
    "pokedex.addFavorite" => "Add to favorites",
    "pokedex.removeFavorite" => "Remove from favorites",
    "pokedex.markCaught" => "Mark as caught",
    "pokedex.unmarkCaught" => "Unmark as caught",
    "pokedex.hp" => "HP",
    "pokedex.attack" => "Attack",
    "pokedex.defense" => "Defense",
    "pokedex.spAttack" => "Sp. Atk",
    "pokedex.spDefense" => "Sp. Def",
    "pokedex.speed" => "Speed",

    "detail.about" => "About",
    "detail.type" => "Type",
    "detail.genus" => "Category",
    "detail.height" => "Height",
    "detail.weight" => "Weight",
    "detail.abilities" => "Abilities",
    "detail.baseStats" => "Base stats",
    "detail.evolution" => "Evolution",
    "detail.weaknesses" => "Weak against",
    "detail.previous" => "Previous",
    "detail.next" => "Next",
    "detail.close" => "Close",
    "detail.hpDesc" => "How much damage a Pokémon can take before fainting.",
    "detail.attackDesc" => "Strength of physical moves.",
    "detail.defenseDesc" => "Resistance to physical moves.",
    "detail.spAttackDesc" => "Strength of special moves.",
    "detail.spDefenseDesc" => "Resistance to special moves.",
    "detail.speedDesc" => "Decides which Pokémon moves first in battle.",

    "quiz.question" => "Who's that Pokémon?",
    "quiz.score" => "Score",
    "quiz.streak" => "Streak",
    "quiz.highScore" => "High score",
    "quiz.accuracy" => "Accuracy",
    "quiz.totalCorrect" => "Correct answers",
    "quiz.totalAttempts" => "Attempts",
    "quiz.correct" => "Correct! It's {{name}}!",
    "quiz.incorrect" => "Not quite. It's {{name}}.",
    "quiz.next" => "Next",
    "quiz.nextIn" => "Next in",
    "quiz.seconds" => "s",
    "quiz.autoNext" => "Auto-next",
    "quiz.quit" => "Quit",
    "quiz.quitTitle" => "Quit the quiz?",
    "quiz.quitMessage" => "Your current score and streak will be lost. Your high score is kept.",
    "quiz.quitConfirm" => "Quit",
    "quiz.tooFew" => "Not enough Pokémon loaded to start a quiz.",
    "quiz.resetStats" => "Reset statistics",
    "quiz.statsReset" => "Statistics have been reset.",

    "types.normal" => "Normal",
    "types.fire" => "Fire",
    "types.water" => "Water",
    "types.grass" => "Grass",
    "types.electric" => "Electric",
    "types.ice" => "Ice",
    "types.fighting" => "Fighting",
    "types.poison" => "Poison",
    "types.ground" => "Ground",
    "types.flying" => "Flying",
    "types.psychic" => "Psychic",
    "types.bug" => "Bug",
    "types.rock" => "Rock",
    "types.ghost" => "Ghost",
    "types.dragon" => "Dragon",
    "types.dark" => "Dark",
    "types.steel" => "Steel",
    "types.fairy" => "Fairy",
};

static PL: phf::Map<&'static str, &'static str> = phf_map! {
    "nav.home" => "Start",
    "nav.pokedex" => "Pokédex",
    "nav.quiz" => "Quiz",
    "nav.themeToggle" => "Zmień motyw",
    "nav.languageToggle" => "Zmień język",

    "theme.light" => "Jasny",
    "theme.dark" => "Ciemny",
    "theme.auto" => "Automatyczny",

    "common.loading" => "Ładowanie...",
    "common.cancel" => "Anuluj",
    "common.error" => "Coś poszło nie tak",

    "home.title" => "Pokédex",
    "home.subtitle" => "Poznaj oryginalne 151 Pokémonów",
    "home.generation" => "Generacja I",
    "home.exploreTitle" => "Przeglądaj Pokédex",
    "home.exploreDescription" => "Szukaj, filtruj według typu i zapisuj ulubione.",
    "home.exploreButton" => "Otwórz Pokédex",
    "home.quizTitle" => "Kto to Pokémon?",
    "home.quizDescription" => "Odgadnij Pokémona po sylwetce i buduj serię.",
    "home.quizButton" => "Rozpocznij quiz",
    "home.poweredBy" => "Dane z PokeAPI",
    "nav.about" => "O aplikacji",
    "about.title" => "O Pokédexie",
    "about.subtitle" => "Pokédex pierwszej generacji z quizem sylwetek",
    "about.features" => "Funkcje",
    "about.featuresDescription" => "Co możesz tutaj zrobić",
    "about.feature1Title" => "Wyszukiwanie rozmyte",
    "about.feature1Desc" => "Znajdź Pokémona po nazwie nawet z literówką, a potem zawęź listę po typie lub ulubionych.",
    "about.feature2Title" => "Quiz sylwetek",
    "about.feature2Desc" => "Zgadnij Pokémona po cieniu i pobij swoją najlepszą serię.",
    "about.feature3Title" => "Ulubione i złapane",
    "about.feature3Desc" => "Oznaczaj Pokémony, które lubisz lub złapałeś. Obie listy są zapisywane na twoim urządzeniu.",
    "about.feature4Title" => "Jasny i ciemny motyw",
    "about.feature4Desc" => "Wybierz motyw lub korzystaj z ustawień systemu.",
    "about.feature5Title" => "Dwa języki",
    "about.feature5Desc" => "Angielski i polski, wykrywany z przeglądarki.",
    "about.techTitle" => "Technologie",
    "about.techDescription" => "Napisane w Rust i skompilowane do WebAssembly",
    "about.creditsTitle" => "Podziękowania",
    "about.dataSource" => "Źródło danych",
    "about.dataSourceDesc" => "Wszystkie dane o Pokémonach pochodzą z",
    "about.pokemon" => "Pokémon",
    "about.pokemonDesc" => "Pokémon i nazwy postaci Pokémon są znakami towarowymi Nintendo.",
    "about.builtBy" => "Autor",
    "about.builtByDesc" => "Projekt fanowski, niezwiązany z Nintendo.",

    "pokedex.title" => "Pokédex",
    "pokedex.found" => "{{count}} Pokémonów",
    "pokedex.search" => "Szukaj Pokémona...",
    "pokedex.filterByType" => "Filtruj według typu",
    "pokedex.allTypes" => "Wszystkie typy",
    "pokedex.favorites" => "Ulubione",
    "pokedex.noFavorites" => "Nie masz jeszcze ulubionych.",
    "pokedex.favoriteAdded" => "Dodano do ulubionych",
    "pokedex.favoriteRemoved" => "Usunięto z ulubionych",
    "pokedex.caughtMarked" => "Oznaczono jako złapanego",
    "pokedex.caughtUnmarked" => "Usunięto oznaczenie złapania",
    "pokedex.clearFilters" => "Wyczyść filtry",
    "pokedex.loading" => "Ładowanie Pokémonów...",
    "pokedex.error" => "Nie udało się wczytać Pokémonów",
    "pokedex.noResults" => "Brak wyników",
    "pokedex.noResultsBase" => "Nie znalazłem żadnego Pokémona",
    "pokedex.noResultsWithName" => "Nie znalazłem Pokémona o nazwie {{query}}",
    "pokedex.noResultsFavoritesPrefix" => "W ulubionych",
    "pokedex.noResultsTypeCondition" => "typu {{type}}",
    "pokedex.browseAll" => "Pokaż wszystkie Pokémony",
    "pokedex.addFavorite" => "Dodaj do ulubionych",
    "pokedex.removeFavorite" => "Usuń z ulubionych",
    "pokedex.markCaught" => "Oznacz jako złapanego",
    "pokedex.unmarkCaught" => "Odznacz jako złapanego",
    "pokedex.hp" => "PŻ",
    "pokedex.attack" => "Atak",
    "pokedex.defense" => "Obrona",
    "pokedex.spAttack" => "Sp. Atak",
    "pokedex.spDefense" => "Sp. Obrona",
    "pokedex.speed" => "Szybkość",

    "detail.about" => "Informacje",
    "detail.type" => "Typ",
    "detail.genus" => "Kategoria",
    "detail.height" => "Wzrost",
    "detail.weight" => "Waga",
    "detail.abilities" => "Zdolności",
    "detail.baseStats" => "Statystyki bazowe",
    "detail.evolution" => "Ewolucja",
    "detail.weaknesses" => "Słabości",
    "detail.previous" => "Poprzedni",
    "detail.next" => "Następny",
    "detail.close" => "Zamknij",
    "detail.hpDesc" => "Ile obrażeń Pokémon zniesie, zanim zemdleje.",
    "detail.attackDesc" => "Siła ruchów fizycznych.",
    "detail.defenseDesc" => "Odporność na ruchy fizyczne.",
    "detail.spAttackDesc" => "Siła ruchów specjalnych.",
    "detail.spDefenseDesc" => "Odporność na ruchy specjalne.",
    "detail.speedDesc" => "Decyduje, który Pokémon rusza się pierwszy.",

    "quiz.question" => "Kto to Pokémon?",
    "quiz.score" => "Wynik",
    "quiz.streak" => "Seria",
    "quiz.highScore" => "Rekord",
    "quiz.accuracy" => "Skuteczność",
    "quiz.totalCorrect" => "Poprawne odpowiedzi",
    "quiz.totalAttempts" => "Próby",
    "quiz.correct" => "Brawo! To {{name}}!",
    "quiz.incorrect" => "Niestety. To {{name}}.",
    "quiz.next" => "Dalej",
    "quiz.nextIn" => "Dalej za",
    "quiz.seconds" => "s",
    "quiz.autoNext" => "Automatycznie dalej",
    "quiz.quit" => "Zakończ",
    "quiz.quitTitle" => "Zakończyć quiz?",
    "quiz.quitMessage" => "Obecny wynik i seria zostaną utracone. Rekord zostanie zachowany.",
    "quiz.quitConfirm" => "Zakończ",
    "quiz.tooFew" => "Za mało Pokémonów, aby rozpocząć quiz.",
    "quiz.resetStats" => "Wyzeruj statystyki",
    "quiz.statsReset" => "Statystyki zostały wyzerowane.",

    "types.normal" => "Normalny",
    "types.fire" => "Ognisty",
    "types.water" => "Wodny",
    "types.grass" => "Trawiasty",
    "types.electric" => "Elektryczny",
    "types.ice" => "Lodowy",
    "types.fighting" => "Walczący",
    "types.poison" => "Trujący",
    "types.ground" => "Ziemny",
    "types.flying" => "Latający",
    "types.psychic" => "Psychiczny",
    "types.bug" => "Robak",
    "types.rock" => "Kamienny",
    "types.ghost" => "Duch",
    "types.dragon" => "Smok",
    "types.dark" => "Mroczny",
    "types.steel" => "Stalowy",
    "types.fairy" => "Wróżka",
};

fn table(lang: Language) -> &'static phf::Map<&'static str, &'static str> {
    match lang {
        Language::En => &EN,
        Language::Pl => &PL,
    }
}

/// Look up `key` in `lang`, falling back to English, then to the key itself.
pub fn t<'a>(lang: Language, key: &'a str) -> &'a str {
    table(lang)
        .get(key)
        .or_else(|| EN.get(key))
        .copied()
        .unwrap_or(key)
}

/// Whether `key` exists in `lang` or the English fallback.
pub fn has_key(lang: Language, key: &str) -> bool {
    table(lang).contains_key(key) || EN.contains_key(key)
}

/// Look up `key` and substitute each `{{name}}` placeholder.
pub fn t_args(lang: Language, key: &str, args: &[(&str, &str)]) -> String {
    let mut out = t(lang, key).to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{{{name}}}}}"), value);
    }
    out
}

/// Detect the UI language from a browser or system locale tag.
pub fn detect_language(locale: Option<&str>) -> Language {
    Language::from_locale(locale)
}

/// Localized name of an elemental type. Unknown types get a capitalized slug.
pub fn type_label(lang: Language, type_name: &str) -> String {
    let key = format!("types.{}", type_name.to_lowercase());
    if has_key(lang, &key) {
        t(lang, &key).to_string()
    } else {
        display_name(type_name)
    }
}

fn stat_key(stat: &str) -> Option<&'static str> {
    Some(match stat {
        "hp" => "hp",
        "attack" => "attack",
        "defense" => "defense",
        "special-attack" => "spAttack",
        "special-defense" => "spDefense",
        "speed" => "speed",
        _ => return None,
    })
}

/// Short label for a PokeAPI stat name (`special-attack` → "Sp. Atk").
pub fn stat_label(lang: Language, stat: &str) -> String {
    match stat_key(stat) {
        Some(key) => t(lang, &format!("pokedex.{key}")).to_string(),
        None => display_name(stat),
    }
}

/// One-sentence explanation of a stat, if there is one.
pub fn stat_description(lang: Language, stat: &str) -> Option<String> {
    stat_key(stat).map(|key| t(lang, &format!("detail.{key}Desc")).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_english_then_key() {
        assert_eq!(t(Language::Pl, "quiz.score"), "Wynik");
        assert_eq!(t(Language::En, "quiz.score"), "Score");
        assert_eq!(t(Language::Pl, "missing.key"), "missing.key");
    }

    #[test]
    fn tables_have_the_same_keys() {
        for key in EN.keys() {
            assert!(PL.contains_key(key), "missing Polish translation for {key}");
        }
        for key in PL.keys() {
            assert!(EN.contains_key(key), "Polish key {key} has no English source");
        }
    }

    #[test]
    fn interpolates_arguments() {
        assert_eq!(
            t_args(Language::En, "pokedex.noResultsWithName", &[("query", "pika")]),
            "I couldn't find any Pokémon named pika"
        );
        assert_eq!(
            t_args(Language::Pl, "pokedex.found", &[("count", "151")]),
            "151 Pokémonów"
        );
    }

    #[test]
    fn type_and_stat_labels() {
        assert_eq!(type_label(Language::En, "fire"), "Fire");
        assert_eq!(type_label(Language::Pl, "Fire"), "Ognisty");
        assert_eq!(type_label(Language::En, "shadow"), "Shadow");
        assert_eq!(stat_label(Language::En, "special-attack"), "Sp. Atk");
        assert_eq!(stat_label(Language::Pl, "speed"), "Szybkość");
        assert!(stat_description(Language::En, "hp").is_some());
        assert!(stat_description(Language::En, "accuracy").is_none());
    }

    #[test]
    fn detects_polish_locales() {
        assert_eq!(detect_language(Some("pl-PL")), Language::Pl);
        assert_eq!(detect_language(Some("en-GB")), Language::En);
        assert_eq!(detect_language(None), Language::En);
    }
}
