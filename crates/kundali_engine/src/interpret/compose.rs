//! Content builders. Each present input yields one [`Section`]; absent
//! inputs yield nothing at all.

use chrono::{DateTime, Utc};
use kundali_time::{datetime_to_jd, jd_to_datetime};
use kundali_vedic::dasha::{DashaPeriod, MAX_DASHA_LEVEL, active_chain};
use kundali_vedic::{ALL_NAKSHATRAS, Graha, Rashi, deg_to_dms, rashi_from_longitude, rashi_lord};

use super::templates::{TipPhrases, fill};
use crate::chart::NatalChart;
use crate::error::EngineError;
use crate::strength::{AshtakavargaReport, ShadbalaResult};
use crate::transit::{TransitEntry, TransitFlag};

/// What one input contributes at each prose length.
#[derive(Debug, Clone, Default)]
pub(crate) struct Section {
    /// Noun phrase for the one-sentence summary.
    pub headline: Option<String>,
    /// One sentence for the paragraph summary.
    pub summary: String,
    /// Sentences for the long form.
    pub detail: Vec<String>,
    pub facts: Vec<String>,
    pub tips: Vec<String>,
    pub timings: Vec<String>,
}

fn sign_name(sign: u8) -> &'static str {
    Rashi::from_index(sign.saturating_sub(1) % 12).western_name()
}

fn format_degree(longitude: f64) -> String {
    let info = rashi_from_longitude(longitude);
    let dms = deg_to_dms(info.degrees_in_rashi);
    format!(
        "{} {}°{:02}′",
        info.rashi.western_name(),
        dms.degrees,
        dms.minutes
    )
}

fn format_date(jd: f64) -> Result<String, EngineError> {
    Ok(jd_to_datetime(jd)?.format("%Y-%m-%d").to_string())
}

fn nakshatra_name(nakshatra: u8) -> &'static str {
    ALL_NAKSHATRAS[(nakshatra.saturating_sub(1) % 27) as usize].name()
}

/// Verb and possessive agreeing with `count` subjects.
fn agreement(count: usize) -> (&'static str, &'static str) {
    if count == 1 {
        ("is", "its")
    } else {
        ("are", "their")
    }
}

fn list(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [one] => (*one).to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

pub(crate) fn natal_section(chart: &NatalChart, phrases: &TipPhrases) -> Section {
    let asc_sign = Rashi::from_index(chart.ascendant_sign() - 1);
    let ruler = rashi_lord(asc_sign);
    let mut s = Section::default();

    let sun = chart.planet(Graha::Surya);
    let moon = chart.planet(Graha::Chandra);
    let moon_nak = moon.map(|m| nakshatra_name(m.nakshatra));

    s.headline = Some(match moon {
        Some(m) => format!(
            "a {} ascendant with the Moon in {}",
            asc_sign.western_name(),
            sign_name(m.sign)
        ),
        None => format!("a {} ascendant", asc_sign.western_name()),
    });

    let mut summary = format!("Your chart rises in {}", asc_sign.western_name());
    if let (Some(m), Some(nak)) = (moon, moon_nak) {
        summary.push_str(&format!(", with the Moon in {} ({nak})", sign_name(m.sign)));
    }
    if let Some(sun) = sun {
        summary.push_str(&format!(" and the Sun in {}", sign_name(sun.sign)));
    }
    summary.push('.');
    s.summary = summary.clone();
    s.detail.push(summary);

    s.facts.push(format!(
        "Ascendant: {} ({} houses).",
        format_degree(chart.ascendant_degree),
        chart.house_system_used
    ));
    for p in &chart.planets {
        let nak = nakshatra_name(p.nakshatra);
        let retrograde = p.is_retrograde && !p.body.is_node();
        s.facts.push(format!(
            "{}: {}, house {}, {} pada {}{}.",
            p.body.english_name(),
            format_degree(p.longitude),
            p.house,
            nak,
            p.pada,
            if retrograde { ", retrograde" } else { "" }
        ));
    }

    if let Some(r) = chart.planet(ruler) {
        s.detail.push(format!(
            "The chart ruler, {}, sits in house {} in {}.",
            ruler.english_name(),
            r.house,
            sign_name(r.sign)
        ));
        s.tips.push(fill(
            phrases.ruler,
            &[("{planet}", ruler.english_name()), ("{house}", &r.house.to_string())],
        ));
    }

    let retro: Vec<&str> = chart
        .planets
        .iter()
        .filter(|p| p.is_retrograde && !p.body.is_node())
        .map(|p| p.body.english_name())
        .collect();
    if !retro.is_empty() {
        let verb = if retro.len() == 1 { "is" } else { "are" };
        let line = format!("{} {verb} retrograde at birth.", list(&retro));
        s.detail.push(line);
    }

    if let Some(busiest) = chart
        .houses
        .iter()
        .filter(|h| h.occupying_planets.len() >= 2)
        .max_by(|a, b| {
            a.occupying_planets
                .len()
                .cmp(&b.occupying_planets.len())
                .then(b.index.cmp(&a.index))
        })
    {
        let names: Vec<&str> = busiest
            .occupying_planets
            .iter()
            .map(|g| g.english_name())
            .collect();
        s.detail.push(format!(
            "House {} is the busiest, holding {}.",
            busiest.index,
            list(&names)
        ));
    }
    s
}

pub(crate) fn dasha_section(
    periods: &[DashaPeriod],
    as_of: Option<DateTime<Utc>>,
    phrases: &TipPhrases,
) -> Result<Option<Section>, EngineError> {
    let Some(first) = periods.first() else {
        return Ok(None);
    };
    let mut s = Section::default();

    let chain = match as_of {
        Some(at) => {
            let max_level = (first.level.depth() + 1).min(MAX_DASHA_LEVEL);
            active_chain(periods, datetime_to_jd(&at), max_level)?
        }
        None => Vec::new(),
    };

    if let Some(current) = chain.first() {
        let lord = current.lord.english_name();
        let end = format_date(current.end_jd)?;
        s.headline = Some(format!("the {lord} period"));
        let mut summary = format!(
            "You are in the {lord} {} until {end}",
            current.level.name().to_lowercase()
        );
        if let Some(sub) = chain.get(1) {
            summary.push_str(&format!(
                ", with the {} sub-period running to {}",
                sub.lord.english_name(),
                format_date(sub.end_jd)?
            ));
        }
        summary.push('.');
        s.summary = summary.clone();
        s.detail.push(summary);
        let tip = fill(phrases.period, &[("{planet}", lord), ("{date}", &end)]);
        s.tips.push(tip);

        for p in &chain {
            s.facts.push(format!(
                "Current {}: {}.",
                p.level.name().to_lowercase(),
                p.lord.english_name()
            ));
            s.timings.push(format!(
                "{} {}: {} to {}",
                p.lord.english_name(),
                p.level.name().to_lowercase(),
                format_date(p.start_jd)?,
                format_date(p.end_jd)?
            ));
        }
        if let Some(next) = periods.iter().find(|p| p.start_jd >= current.end_jd) {
            let start = format_date(next.start_jd)?;
            s.detail.push(format!(
                "The {} {} follows from {start}.",
                next.lord.english_name(),
                next.level.name().to_lowercase()
            ));
            s.timings.push(format!(
                "Next {}: {} from {start}",
                next.level.name().to_lowercase(),
                next.lord.english_name()
            ));
        }
    } else {
        let lord = first.lord.english_name();
        let end = format_date(first.end_jd)?;
        s.headline = Some(format!("the {lord} period at birth"));
        s.summary = format!(
            "Life opened in the {lord} {}, which ran to {end}.",
            first.level.name().to_lowercase()
        );
        s.detail.push(s.summary.clone());
        let order: Vec<&str> = periods
            .iter()
            .skip(1)
            .take(8)
            .map(|p| p.lord.english_name())
            .collect();
        if !order.is_empty() {
            let line = format!("After it come {}, in that order.", list(&order));
            s.detail.push(line);
        }
        let fact = format!("{} at birth: {}.", first.level.name(), lord);
        s.facts.push(fact);
        for p in periods {
            s.timings.push(format!(
                "{} {}: {} to {}",
                p.lord.english_name(),
                p.level.name().to_lowercase(),
                format_date(p.start_jd)?,
                format_date(p.end_jd)?
            ));
        }
    }
    Ok(Some(s))
}

pub(crate) fn transit_section(entries: &[TransitEntry], phrases: &TipPhrases) -> Option<Section> {
    if entries.is_empty() {
        return None;
    }
    let mut s = Section::default();
    let flagged: Vec<&TransitEntry> = entries
        .iter()
        .filter(|e| e.flag != TransitFlag::None)
        .collect();

    for e in &flagged {
        let direction = if e.difference_degrees >= 0.0 {
            "past"
        } else {
            "short of"
        };
        s.facts.push(format!(
            "Transiting {} is {:.1}° {direction} its natal degree in {} (natal house {}, {}).",
            e.body.english_name(),
            e.difference_degrees.abs(),
            sign_name(e.current_sign),
            e.current_house,
            match e.flag {
                TransitFlag::Conjunction => "conjunction",
                _ => "notable",
            }
        ));
    }

    let conjunctions: Vec<&str> = flagged
        .iter()
        .filter(|e| e.flag == TransitFlag::Conjunction)
        .map(|e| e.body.english_name())
        .collect();

    if let Some(&closest) = conjunctions.first() {
        s.headline = Some(format!("{closest} returning to its birth degree"));
        let (verb, possessive) = agreement(conjunctions.len());
        s.summary = format!(
            "In the current transits, {} {verb} back near {possessive} natal degree.",
            list(&conjunctions)
        );
        let tip = fill(phrases.return_to_natal, &[("{planet}", closest)]);
        s.tips.push(tip);
    } else {
        s.summary = "In the current transits, no planet is close to its natal degree.".to_string();
    }
    s.detail.push(s.summary.clone());

    let notables: Vec<&str> = flagged
        .iter()
        .filter(|e| e.flag == TransitFlag::Notable)
        .map(|e| e.body.english_name())
        .collect();
    if !notables.is_empty() {
        let (verb, possessive) = agreement(notables.len());
        s.detail.push(format!(
            "{} {verb} approaching or leaving {possessive} natal position.",
            list(&notables)
        ));
    }

    let slow_movers = entries
        .iter()
        .filter(|e| matches!(e.body, Graha::Guru | Graha::Shani));
    for e in slow_movers {
        let motion = if e.is_retrograde {
            " while retrograde"
        } else {
            ""
        };
        s.detail.push(format!(
            "Transiting {} moves through {}, your natal house {}{}.",
            e.body.english_name(),
            sign_name(e.current_sign),
            e.current_house,
            motion
        ));
    }
    Some(s)
}

pub(crate) fn metrics_section(
    shadbala: &[ShadbalaResult],
    ashtakavarga: Option<&AshtakavargaReport>,
    phrases: &TipPhrases,
) -> Option<Section> {
    if shadbala.is_empty() && ashtakavarga.is_none() {
        return None;
    }
    let mut s = Section::default();
    let mut summary_parts = Vec::new();

    let by_rupas =
        |a: &&ShadbalaResult, b: &&ShadbalaResult| a.total_rupas.total_cmp(&b.total_rupas);
    let strongest = shadbala.iter().max_by(by_rupas);
    let weakest = shadbala.iter().min_by(by_rupas);
    if let (Some(strong), Some(weak)) = (strongest, weakest) {
        let name = strong.graha.english_name();
        s.headline = Some(format!("strength concentrated in {name}"));
        summary_parts.push(format!("{name} is the strongest planet by Shadbala"));
        s.facts.push(format!(
            "Strongest planet by Shadbala: {name} ({:.2} rupas).",
            strong.total_rupas
        ));
        s.facts.push(format!(
            "Weakest planet by Shadbala: {} ({:.2} rupas).",
            weak.graha.english_name(),
            weak.total_rupas
        ));
        let strong_count = shadbala.iter().filter(|r| r.is_strong).count();
        s.detail.push(format!(
            "{strong_count} of {} planets meet their required Shadbala, led by {name} at {:.2} rupas.",
            shadbala.len(),
            strong.total_rupas
        ));
        s.tips.push(fill(phrases.strongest, &[("{planet}", name)]));
        if weak.graha != strong.graha {
            s.detail.push(format!(
                "{} is the least supported at {:.2} rupas.",
                weak.graha.english_name(),
                weak.total_rupas
            ));
            let tip = fill(phrases.weakest, &[("{planet}", weak.graha.english_name())]);
            s.tips.push(tip);
        }
    }

    if let Some(report) = ashtakavarga {
        let (best, most) = report.strongest_house();
        let (worst, least) = report.weakest_house();
        summary_parts.push(format!("house {best} has the most Ashtakavarga support"));
        s.facts.extend([
            format!("Highest Sarva Ashtakavarga: house {best} ({most} bindus)."),
            format!("Lowest Sarva Ashtakavarga: house {worst} ({least} bindus)."),
        ]);
        s.detail.push(format!(
            "In the Ashtakavarga, house {best} collects {most} bindus and house {worst} only {least}."
        ));
        let tip = fill(phrases.best_house, &[("{house}", &best.to_string())]);
        s.tips.push(tip);
        if s.headline.is_none() {
            s.headline = Some(format!("strong support in house {best}"));
        }
    }

    let mut summary = summary_parts.join(", and ");
    if let Some(first) = summary.get(..1) {
        summary = first.to_uppercase() + &summary[1..];
    }
    summary.push('.');
    s.summary = summary;
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_joins_naturally() {
        assert_eq!(list(&[]), "");
        assert_eq!(list(&["Mars"]), "Mars");
        assert_eq!(list(&["Mars", "Venus"]), "Mars and Venus");
        assert_eq!(list(&["Sun", "Mars", "Venus"]), "Sun, Mars and Venus");
    }

    #[test]
    fn degree_format() {
        assert_eq!(format_degree(45.5), "Taurus 15°30′");
        assert_eq!(format_degree(0.0), "Aries 0°00′");
    }

    #[test]
    fn sign_names_are_one_based() {
        assert_eq!(sign_name(1), "Aries");
        assert_eq!(sign_name(12), "Pisces");
    }
}
