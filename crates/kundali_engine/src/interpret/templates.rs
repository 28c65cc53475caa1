//! Phrasing tables. Moods change wording only; content comes from the chart.
//!
//! Placeholders: `{planet}`, `{house}`, `{sign}`, `{date}`.

use super::{Length, Mood};

/// Opening and closing words for one (mood, length) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Template {
    pub opening: &'static str,
    pub closing: &'static str,
}

const fn t(opening: &'static str, closing: &'static str) -> Template {
    Template { opening, closing }
}

/// Rows follow [`Mood`] order, columns follow [`Length`] order.
#[rustfmt::skip]
static TEMPLATES: [[Template; 3]; 5] = [
    // anxious
    [
        t("Take a slow breath:", ""),
        t("There is more steadiness here than it may feel like right now.",
          "Move one small step at a time and let the pattern carry some of the weight."),
        t("Before anything else, know that this chart has solid ground in it.",
          "Nothing here asks you to rush. Return to what steadies you and let the rest unfold in its own order."),
    ],
    // confident
    [
        t("You are well placed:", ""),
        t("Your chart backs the momentum you already feel.",
          "Use that strength deliberately and keep it pointed at what matters most."),
        t("This chart gives you real leverage, and it is worth knowing exactly where it sits.",
          "Lead with your strongest placements, and let confidence follow clear choices rather than replace them."),
    ],
    // stuck
    [
        t("Something is ready to shift:", ""),
        t("The pattern that feels stalled has more movement in it than it shows.",
          "Pick the smallest lever available and pull it today; momentum builds from there."),
        t("Feeling stuck often means the next move has not been named yet, and the chart helps name it.",
          "Choose one thread, follow it for a week, and watch what loosens."),
    ],
    // excited
    [
        t("The energy is real:", ""),
        t("There is genuine fuel in this chart for what you are eager to start.",
          "Channel the excitement into one concrete plan so it lasts past the first rush."),
        t("Your enthusiasm has something to stand on, and the details below show where.",
          "Give the excitement structure: a plan, a rhythm, and a point where you check in with yourself."),
    ],
    // curious
    [
        t("Here is the shape of it:", ""),
        t("Here is what the chart shows when you look at it closely.",
          "Each of these threads rewards a closer look when you have time to explore it."),
        t("Let us walk through the chart piece by piece and see how the parts connect.",
          "Treat these notes as a map rather than a verdict, and follow whichever thread interests you most."),
    ],
];

pub(crate) fn template(mood: Mood, length: Length) -> &'static Template {
    &TEMPLATES[mood.index()][length.index()]
}

/// Advice phrasing for one mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TipPhrases {
    /// `{planet}` in `{house}`.
    pub ruler: &'static str,
    /// `{planet}`.
    pub strongest: &'static str,
    /// `{planet}`.
    pub weakest: &'static str,
    /// `{house}`.
    pub best_house: &'static str,
    /// `{planet}`, `{date}`.
    pub period: &'static str,
    /// `{planet}`.
    pub return_to_natal: &'static str,
}

#[rustfmt::skip]
static TIPS: [TipPhrases; 5] = [
    // anxious
    TipPhrases {
        ruler: "When things feel shaky, come back to house {house} matters, where your chart ruler {planet} sits.",
        strongest: "Lean on {planet}; it is your most reliable source of strength.",
        weakest: "Go gently with {planet} themes and do not demand too much of them at once.",
        best_house: "House {house} is your safest ground, so anchor routines there.",
        period: "The {planet} period runs until {date}; there is time, so pace yourself.",
        return_to_natal: "{planet} is back near its birth degree; an old worry may resurface only to be settled.",
    },
    // confident
    TipPhrases {
        ruler: "Your chart ruler {planet} works through house {house}; invest there first.",
        strongest: "Put {planet} to work; it is your strongest planet.",
        weakest: "Shore up {planet} themes before they slow you down.",
        best_house: "House {house} is where effort pays back most, so aim there.",
        period: "Make full use of the {planet} period before it closes on {date}.",
        return_to_natal: "{planet} is back on its birth degree; this is a good moment to claim what it promised.",
    },
    // stuck
    TipPhrases {
        ruler: "Start with house {house}, where your chart ruler {planet} lives; movement there spreads.",
        strongest: "{planet} is your strongest lever, so begin with what it rules.",
        weakest: "Expect slower going through {planet} themes and route around them for now.",
        best_house: "House {house} has the most support; small moves there unstick the rest.",
        period: "The {planet} period lasts until {date}; work with its pace rather than against it.",
        return_to_natal: "{planet} has returned to its birth degree; an old pattern is ready to be redone.",
    },
    // excited
    TipPhrases {
        ruler: "Point the energy at house {house}, home of your chart ruler {planet}.",
        strongest: "{planet} is your powerhouse; build the plan around it.",
        weakest: "Give {planet} themes a little extra preparation so they keep up.",
        best_house: "House {house} is primed for growth; start there.",
        period: "The {planet} period runs to {date}, which is plenty of runway.",
        return_to_natal: "{planet} is lighting up its birth degree; a fresh start along its lines is favoured.",
    },
    // curious
    TipPhrases {
        ruler: "Explore house {house}: your chart ruler {planet} sits there and colours the whole chart.",
        strongest: "Study {planet} closely; it carries the most strength.",
        weakest: "Notice how {planet} themes behave; they need the most care.",
        best_house: "House {house} holds the most support and is worth examining first.",
        period: "Watch how the {planet} period unfolds until {date}.",
        return_to_natal: "{planet} is near its birth degree; compare what is happening now with where it began.",
    },
];

pub(crate) fn tips(mood: Mood) -> &'static TipPhrases {
    &TIPS[mood.index()]
}

/// Fill named placeholders.
pub(crate) fn fill(template: &str, pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .fold(template.to_string(), |acc, (key, value)| {
            acc.replace(key, value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpret::{ALL_LENGTHS, ALL_MOODS};

    #[test]
    fn every_cell_has_an_opening() {
        for mood in ALL_MOODS {
            for length in ALL_LENGTHS {
                let opening = template(mood, length).opening;
                assert!(!opening.is_empty(), "{mood:?} {length:?}");
            }
        }
    }

    #[test]
    fn micro_has_no_closing() {
        for mood in ALL_MOODS {
            assert!(template(mood, Length::Micro).closing.is_empty());
        }
    }

    #[test]
    fn fill_replaces_all_keys() {
        let pairs = [("{planet}", "Venus"), ("{date}", "2031-01-01")];
        let s = fill(tips(Mood::Curious).period, &pairs);
        assert_eq!(s, "Watch how the Venus period unfolds until 2031-01-01.");
    }

    #[test]
    fn tables_mention_no_input_sections() {
        let mut all = String::new();
        for row in &TEMPLATES {
            for cell in row {
                all.push_str(cell.opening);
                all.push_str(cell.closing);
            }
        }
        for p in &TIPS {
            all.push_str(p.ruler);
            all.push_str(p.strongest);
            all.push_str(p.weakest);
            all.push_str(p.best_house);
        }
        let lower = all.to_lowercase();
        for word in [
            "transit",
            "dasha",
            "shadbala",
            "ashtakavarga",
            "bindu",
            "undefined",
        ] {
            assert!(!lower.contains(word), "{word}");
        }
    }
}
