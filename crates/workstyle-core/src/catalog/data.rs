//! Built-in catalog content: the sixteen workstyle types, the pair map
//! covering all 24 (DISC, RIASEC) primary combinations, the DISC-only
//! fallback map, and the similarity graph.

use super::{CatalogData, FallbackEntry, PairEntry, PersonalityType, RelatedType, TypeRelation};
use crate::types::{Disc, Riasec};

fn ptype(id: &str, name: &str, summary: &str, disc: Disc, riasec: Riasec) -> PersonalityType {
    PersonalityType {
        id: id.into(),
        name: name.into(),
        summary: summary.into(),
        disc_primary: disc,
        riasec_primary: riasec,
    }
}

fn pair(disc: Disc, riasec: Riasec, type_id: &str) -> PairEntry {
    PairEntry {
        disc,
        riasec,
        type_id: type_id.into(),
    }
}

fn relation(type_id: &str, related: &[(&str, &str)]) -> TypeRelation {
    TypeRelation {
        type_id: type_id.into(),
        related: related
            .iter()
            .map(|&(id, note)| RelatedType {
                type_id: id.into(),
                note: note.into(),
            })
            .collect(),
    }
}

/// The full built-in catalog. Validated by `TypeCatalog::new`.
pub(super) fn builtin_data() -> CatalogData {
    use Disc::*;
    use Riasec::*;

    let types = vec![
        // Dominance-anchored
        ptype(
            "trailblazer",
            "Trailblazer",
            "Drives into unmapped territory and pulls the team along by sheer momentum.",
            Dominance,
            Enterprising,
        ),
        ptype(
            "strategist",
            "Strategist",
            "Turns ambiguity into a plan and pushes hard until the plan wins.",
            Dominance,
            Investigative,
        ),
        ptype(
            "vanguard",
            "Vanguard",
            "Leads from the front on concrete, hands-on problems.",
            Dominance,
            Realistic,
        ),
        ptype(
            "director",
            "Director",
            "Takes charge of people and keeps the group moving as one.",
            Dominance,
            Social,
        ),
        // Influence-anchored
        ptype(
            "promoter",
            "Promoter",
            "Sells the vision, opens doors, and turns strangers into allies.",
            Influence,
            Enterprising,
        ),
        ptype(
            "storyteller",
            "Storyteller",
            "Wins hearts with narrative and gives dry work a human shape.",
            Influence,
            Artistic,
        ),
        ptype(
            "connector",
            "Connector",
            "Knows everyone, reads the room, and keeps the network humming.",
            Influence,
            Social,
        ),
        ptype(
            "visionary",
            "Visionary",
            "Chases big questions out loud and energizes others to chase them too.",
            Influence,
            Investigative,
        ),
        // Steadiness-anchored
        ptype(
            "craftsman",
            "Craftsman",
            "Builds patiently and well, valuing the work itself over the spotlight.",
            Steadiness,
            Realistic,
        ),
        ptype(
            "mediator",
            "Mediator",
            "Holds the team together, easing friction before it becomes conflict.",
            Steadiness,
            Social,
        ),
        ptype(
            "steward",
            "Steward",
            "Keeps commitments, guards standards, and makes reliability look easy.",
            Steadiness,
            Conventional,
        ),
        ptype(
            "counselor",
            "Counselor",
            "Listens first, studies the problem, and advises with calm depth.",
            Steadiness,
            Investigative,
        ),
        // Conscientiousness-anchored
        ptype(
            "analyst",
            "Analyst",
            "Follows the evidence wherever it leads and trusts the numbers.",
            Conscientiousness,
            Investigative,
        ),
        ptype(
            "architect",
            "Architect",
            "Designs systems that hold up under load, on paper and in the field.",
            Conscientiousness,
            Realistic,
        ),
        ptype(
            "auditor",
            "Auditor",
            "Finds the flaw everyone else missed and closes it for good.",
            Conscientiousness,
            Conventional,
        ),
        ptype(
            "curator",
            "Curator",
            "Brings taste and rigor together, polishing work until it speaks.",
            Conscientiousness,
            Artistic,
        ),
    ];

    // Every (DISC, RIASEC) combination maps to its nearest type.
    let pairs = vec![
        pair(Dominance, Realistic, "vanguard"),
        pair(Dominance, Investigative, "strategist"),
        pair(Dominance, Artistic, "trailblazer"),
        pair(Dominance, Social, "director"),
        pair(Dominance, Enterprising, "trailblazer"),
        pair(Dominance, Conventional, "strategist"),
        pair(Influence, Realistic, "promoter"),
        pair(Influence, Investigative, "visionary"),
        pair(Influence, Artistic, "storyteller"),
        pair(Influence, Social, "connector"),
        pair(Influence, Enterprising, "promoter"),
        pair(Influence, Conventional, "connector"),
        pair(Steadiness, Realistic, "craftsman"),
        pair(Steadiness, Investigative, "counselor"),
        pair(Steadiness, Artistic, "craftsman"),
        pair(Steadiness, Social, "mediator"),
        pair(Steadiness, Enterprising, "mediator"),
        pair(Steadiness, Conventional, "steward"),
        pair(Conscientiousness, Realistic, "architect"),
        pair(Conscientiousness, Investigative, "analyst"),
        pair(Conscientiousness, Artistic, "curator"),
        pair(Conscientiousness, Social, "curator"),
        pair(Conscientiousness, Enterprising, "analyst"),
        pair(Conscientiousness, Conventional, "auditor"),
    ];

    let fallbacks = vec![
        FallbackEntry {
            disc: Dominance,
            type_id: "trailblazer".into(),
        },
        FallbackEntry {
            disc: Influence,
            type_id: "connector".into(),
        },
        FallbackEntry {
            disc: Steadiness,
            type_id: "mediator".into(),
        },
        FallbackEntry {
            disc: Conscientiousness,
            type_id: "analyst".into(),
        },
    ];

    let relations = vec![
        relation(
            "trailblazer",
            &[
                ("promoter", "Shares the appetite for new ground, but persuades where you push."),
                ("vanguard", "Same drive to lead, pointed at concrete problems instead of open ones."),
                ("strategist", "Equally decisive, with more patience for working out the angles first."),
            ],
        ),
        relation(
            "strategist",
            &[
                ("analyst", "Shares the love of evidence, with less urge to command the outcome."),
                ("trailblazer", "Same decisiveness, but acts on instinct where you act on analysis."),
                ("visionary", "Chases the same big questions, out loud and with company."),
            ],
        ),
        relation(
            "vanguard",
            &[
                ("craftsman", "Same respect for hands-on work, minus the need to be out front."),
                ("trailblazer", "Equally bold, drawn to open opportunity instead of hard terrain."),
                ("architect", "Builds durable things too, preferring the drawing board to the front line."),
            ],
        ),
        relation(
            "director",
            &[
                ("connector", "Also energized by people, leading through warmth rather than command."),
                ("mediator", "Shares the focus on group cohesion, from the center instead of the helm."),
                ("trailblazer", "Same comfort with authority, aimed at ventures instead of teams."),
            ],
        ),
        relation(
            "promoter",
            &[
                ("trailblazer", "Shares the entrepreneurial pull, with command replacing charm."),
                ("connector", "Equally social, tending relationships rather than deals."),
                ("storyteller", "Also wins people over, through crafted narrative rather than pitch."),
            ],
        ),
        relation(
            "storyteller",
            &[
                ("curator", "Shares the artistic eye, applied with quiet rigor instead of flourish."),
                ("connector", "Equally people-first, working the room rather than the page."),
                ("visionary", "Also trades in ideas, favoring questions over narratives."),
            ],
        ),
        relation(
            "connector",
            &[
                ("mediator", "Shares the people focus, steadying the group rather than expanding it."),
                ("promoter", "Equally outgoing, pointed at opportunities instead of relationships."),
                ("director", "Also moves groups of people, by taking charge rather than weaving ties."),
            ],
        ),
        relation(
            "visionary",
            &[
                ("strategist", "Shares the big-picture appetite, executing where you imagine."),
                ("storyteller", "Also communicates ideas vividly, through story rather than inquiry."),
                ("analyst", "Equally curious, grounded in data instead of possibility."),
            ],
        ),
        relation(
            "craftsman",
            &[
                ("vanguard", "Same hands-on instinct, with a taste for the front line you skip."),
                ("steward", "Equally dependable, guarding process where you guard the work."),
                ("architect", "Also builds to last, starting from the design rather than the bench."),
            ],
        ),
        relation(
            "mediator",
            &[
                ("connector", "Shares the social center of gravity, expanding where you stabilize."),
                ("counselor", "Equally calm and attentive, advising rather than reconciling."),
                ("steward", "Also holds the team steady, through standards instead of empathy."),
            ],
        ),
        relation(
            "steward",
            &[
                ("auditor", "Shares the respect for standards, hunting defects where you keep order."),
                ("craftsman", "Equally steady, devoted to the artifact rather than the process."),
                ("mediator", "Also keeps things stable, through people instead of procedure."),
            ],
        ),
        relation(
            "counselor",
            &[
                ("analyst", "Shares the investigative depth, with data replacing dialogue."),
                ("mediator", "Equally supportive, resolving tension where you build understanding."),
            ],
        ),
        relation(
            "analyst",
            &[
                ("strategist", "Shares the analytical core, adding the will to drive the outcome."),
                ("auditor", "Equally exacting, checking conformance where you test hypotheses."),
                ("counselor", "Also thinks before speaking, with people where you work with data."),
            ],
        ),
        relation(
            "architect",
            &[
                ("analyst", "Shares the rigor, studying systems where you construct them."),
                ("craftsman", "Equally quality-driven, working the material instead of the blueprint."),
                ("auditor", "Also prizes correctness, verifying what you design."),
            ],
        ),
        relation(
            "auditor",
            &[
                ("steward", "Shares the devotion to standards, maintaining where you inspect."),
                ("analyst", "Equally evidence-bound, exploring where you verify."),
                ("architect", "Also thinks in systems, building what you would stress-test."),
            ],
        ),
        relation(
            "curator",
            &[
                ("storyteller", "Shares the artistic sensibility, performing where you refine."),
                ("auditor", "Equally detail-obsessed, with taste standing in for rules."),
                ("analyst", "Also measures twice, against data rather than aesthetics."),
            ],
        ),
    ];

    CatalogData {
        types,
        pairs,
        fallbacks,
        relations,
    }
}
