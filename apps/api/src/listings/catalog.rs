// Hard-coded catalogs the listing generator draws from.

pub struct Company {
    pub name: &'static str,
    pub domain: &'static str,
}

const fn company(name: &'static str, domain: &'static str) -> Company {
    Company { name, domain }
}

/// Fictional employers. Twenty entries so a full page never repeats a company.
pub const COMPANIES: &[Company] = &[
    company("Nimbus Labs", "nimbuslabs.io"),
    company("Bluepeak Analytics", "bluepeak.ai"),
    company("Orbitware", "orbitware.com"),
    company("Quantum Leaf", "quantumleaf.tech"),
    company("Saffron Systems", "saffronsystems.in"),
    company("Tidewater Health", "tidewaterhealth.com"),
    company("Copperline Finance", "copperline.finance"),
    company("Vertex Mobility", "vertexmobility.co"),
    company("Pinegrove Studios", "pinegrove.studio"),
    company("Lumen Retail", "lumenretail.com"),
    company("Ironbridge Logistics", "ironbridge.io"),
    company("Kestrel Security", "kestrelsec.com"),
    company("Monsoon Media", "monsoonmedia.in"),
    company("Greenfield Energy", "greenfield.energy"),
    company("Atlas EdTech", "atlasedtech.org"),
    company("Redwood Robotics", "redwoodrobotics.ai"),
    company("Silverline Travel", "silverline.travel"),
    company("Cobalt Cloud", "cobaltcloud.dev"),
    company("Harbor Insurance", "harborinsure.com"),
    company("Zenith Games", "zenithgames.gg"),
];

pub const JOB_SENIORITY: &[&str] = &["", "Senior ", "Junior ", "Lead ", "Associate "];

pub const JOB_SALARIES: &[&str] = &[
    "₹4 - 6 LPA",
    "₹6 - 10 LPA",
    "₹8 - 14 LPA",
    "₹12 - 18 LPA",
    "₹18 - 28 LPA",
    "₹25 - 40 LPA",
];

pub const INTERNSHIP_TITLE_FORMATS: &[&str] = &[
    "{role} Intern",
    "{role} Internship",
    "Summer Intern, {role}",
    "{role} Trainee",
];

pub const INTERNSHIP_STIPENDS: &[&str] = &[
    "Unpaid (certificate + LOR)",
    "₹5,000 / month",
    "₹10,000 / month",
    "₹15,000 / month",
    "₹20,000 / month",
    "₹30,000 / month",
];

pub const INTERNSHIP_DURATIONS: &[&str] = &["2 months", "3 months", "6 months"];

pub const FREELANCE_PROJECTS: &[&str] = &[
    "MVP build",
    "website revamp",
    "analytics dashboard",
    "API integration",
    "performance audit",
    "mobile app prototype",
    "content migration",
    "automation scripts",
];

pub const FREELANCE_RATES: &[&str] = &[
    "$15 - 25 / hour",
    "$25 - 40 / hour",
    "$40 - 60 / hour",
    "$500 fixed price",
    "$1,500 fixed price",
    "$3,000 fixed price",
];

pub const WORK_MODES: &[&str] = &["On-site", "Hybrid", "Remote"];
