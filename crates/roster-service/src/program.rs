//! Event program data: the show setlist and audience side-missions.
//!
//! Static content served as-is; the roster never changes it.

use serde::Serialize;

/// One setlist entry
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetItem {
    pub id: u32,
    pub code_name: &'static str,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approx_time: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

/// One audience side-mission
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SETLIST: &[SetItem] = &[
    SetItem {
        id: 1,
        code_name: "Cold Open",
        title: "First contact with the audience",
        approx_time: Some("≈ 6:00 PM"),
        note: Some("Stay sharp — this is your first impression op."),
    },
    SetItem {
        id: 2,
        code_name: "Operation Throwback",
        title: "Classic In The Buff charts",
        approx_time: Some("≈ 6:10 PM"),
        note: Some("Identify any alumni agents singing along."),
    },
    SetItem {
        id: 3,
        code_name: "Deep Cover Solos",
        title: "Feature solos from undercover agents",
        approx_time: Some("≈ 6:25 PM"),
        note: Some("Your mission: do not blow their cover by screaming their real names."),
    },
    SetItem {
        id: 4,
        code_name: "Intermission Debrief",
        title: "Short break for snacks and intel gathering",
        approx_time: Some("≈ 6:40 PM"),
        note: Some("Hydrate. Stretch. Strategize your favorite moment so far."),
    },
    SetItem {
        id: 5,
        code_name: "Phase Two",
        title: "New arrangements and secret weapons",
        approx_time: Some("≈ 6:55 PM"),
        note: Some("Listen for code phrases hidden in the lyrics."),
    },
    SetItem {
        id: 6,
        code_name: "Final Transmission",
        title: "Encore & classified goodbyes",
        approx_time: Some("≈ 7:20 PM"),
        note: Some("Mission complete. Extract safely, humming the last chord."),
    },
];

pub const MISSIONS: &[Mission] = &[
    Mission {
        id: 1,
        title: "Silent Applause Protocol",
        description: "During one quiet intro, try applauding just by snapping or tapping your fingers.",
    },
    Mission {
        id: 2,
        title: "Codenames Only",
        description: "For one full song, refer to your friends only by spy-style codenames.",
    },
    Mission {
        id: 3,
        title: "Eyes Only Intel",
        description: "Spot your favorite harmony line and lock eyes with someone when you hear it.",
    },
];
