//! Fixed built-in geography and category tables, used when no external
//! table has been loaded.

use super::category::{CatRow, CatTable};
use super::geography::{GeoRow, GeoTable};

const GEO: &[(&str, &str, &[&str])] = &[
    (
        "AME",
        "WESTERN EUROPE",
        &[
            "Belgium",
            "Denmark",
            "France",
            "Greece",
            "Ireland",
            "Malta",
            "Norway",
            "Spain",
            "Sweden",
            "UNITED KINGDOM",
            "Netherlands",
            "Finland",
            "Luxembourg",
            "Portugal",
            "Cyprus",
        ],
    ),
    (
        "APMEA",
        "APMEA SOUTH",
        &[
            "Australia",
            "Indonesia",
            "Malaysia",
            "Papua New Guinea",
            "Samoa",
            "Singapore",
            "Solomon Islands",
            "Vietnam",
            "Fiji",
            "New Zealand",
            "Cambodia",
            "Philippines",
            "China",
        ],
    ),
    ("USA", "USA", &["USA"]),
];

const CAT: &[(&str, &str, &str, &[&str])] = &[
    ("Marketing", "Marketing Prof Svc", "Advertising Services", &["Media services"]),
    ("Marketing", "Marketing Prof Svc", "Creative agency fees", &["Creative agency fees"]),
    (
        "Marketing",
        "Marketing Prof Svc",
        "Market research",
        &["Market research-customised", "Market research-syndicated"],
    ),
    (
        "Marketing",
        "Marketing Prof Svc",
        "Marketing & Trade Event",
        &[
            "1-2-1 Activation, Brand Ambassadors & Hostesses",
            "Marketing Event Management",
            "Sponsorship",
        ],
    ),
    (
        "Marketing",
        "Marketing Prof Svc",
        "PR Services",
        &["Partnership", "Printing Cylinders", "PR Agency"],
    ),
    (
        "Marketing",
        "Marketing Prof Svc",
        "Trade Marketing Services",
        &[
            "D2C-Social Selling",
            "Loyalty & Incentive Programmes",
            "Other Trade Marketing Services",
        ],
    ),
    (
        "Marketing",
        "Marketing POSM",
        "POSM Services",
        &[
            "Cigarette Vending Machines Purchase & Lease/Services",
            "Marketing Print",
            "Merchandising Services",
            "Permanent POSM",
            "POSM Leasing Services",
            "Promotional merchandise",
            "Semi-Permanent POSM",
        ],
    ),
    (
        "Operations",
        "Production",
        "Production Services",
        &["Manufacturing support services", "Production"],
    ),
    ("Operations", "Production", "Spare Parts", &["Spare Parts"]),
    ("Operations", "Production", "After Sales", &["After Sales"]),
    (
        "Operations",
        "OSS",
        "Material Handling/Storage Machinery",
        &[
            "General Machinery",
            "Material Handling Equipment FLTS",
            "Warehouse Material (pallets or other consumables)",
            "Workshop supplies & consumables",
        ],
    ),
    (
        "Operations",
        "OSS",
        "Packaging Materials and Supply",
        &[
            "Leaf Packaging materials & supplies",
            "Tobacco Case C48",
            "Warehouse Packaging Materials",
        ],
    ),
    (
        "Operations",
        "OSS",
        "Quality Control",
        &["Factory Quality Control and Service", "Quality Control"],
    ),
    (
        "Operations",
        "Agricultural Inputs",
        "Agrochemicals (Herbicides, Insecticides, etc.)",
        &["Agrochemicals (Herbicides, Insecticides, etc.)"],
    ),
    (
        "Operations",
        "Agricultural Inputs",
        "Fertilizers (NPK, Soluble, etc.)",
        &["Fertilizers (NPK, Soluble, etc.)"],
    ),
    (
        "Operations",
        "Agricultural Inputs",
        "Other Agricultural Inputs (Supplies, Services)",
        &["Other Agricultural Inputs (Supplies, Services)"],
    ),
    (
        "Corporate",
        "Facilities",
        "Facilities Services",
        &[
            "Archiving",
            "Catering Services and Supplies",
            "Food & Beverages",
            "Industrial Cleaning Services",
            "Integrated Facilities Management",
            "Landscaping, Roads and Grounds, Snow removal",
            "Office Cleaning Equipment and Supplies",
            "Other Facilities",
            "Plants & Flowers",
            "Staff Transportation",
            "Statutory Compliance & Inspections",
            "Vending Purchase/Lease/Maintenance",
        ],
    ),
    (
        "Corporate",
        "Facilities",
        "Building",
        &[
            "Building-Consultancy & Project management",
            "Building Construction",
            "Building equipment and installation",
            "Building Maintenance and Repair",
        ],
    ),
    (
        "Corporate",
        "Facilities",
        "Corporate Real Estate",
        &["Property Lease", "Property Purchase or Sale"],
    ),
    ("Corporate", "Facilities", "Pest control", &["Pest control products & services"]),
    (
        "Corporate",
        "Facilities",
        "Security Services",
        &["Security Services and Supplies", "Security Technology & Services"],
    ),
    ("Corporate", "Facilities", "Uniform", &["Uniform Services and Management"]),
    (
        "Corporate",
        "Facilities",
        "Utilities",
        &["Electricity", "Fuels", "Gas", "Utilities other", "Water"],
    ),
    ("Corporate", "Facilities", "Waste", &["Waste Management Services"]),
    ("Corporate", "Prof Svc", "Consultancy", &["Consultancy"]),
    (
        "Corporate",
        "Prof Svc",
        "Finance Services",
        &["Banking and investment", "Group Company Auditors"],
    ),
    (
        "Corporate",
        "Prof Svc",
        "Legal Services",
        &["Legal Services", "Legal Services Other", "Litigation", "Patents or Trade Mark"],
    ),
    (
        "Corporate",
        "Prof Svc",
        "Other Audits (local), Recovery Audits, Accounting",
        &["Other Audits (local), Recovery Audits, Accounting"],
    ),
    (
        "Corporate",
        "Prof Svc",
        "Translation, Information, Testing, Inspection etc",
        &["Translation, Information, Testing, Inspection etc"],
    ),
    (
        "Corporate",
        "HR Svc",
        "HR Professional services",
        &["HR Consultancy", "Outplacement", "Recruitment", "Training & education"],
    ),
    (
        "Corporate",
        "HR Svc",
        "Reward",
        &[
            "Benefits & Employee Assistance",
            "External Payroll Services",
            "Health & Life Insurance",
            "Healthcare Services",
            "HR Compensation and Benefits Surveys",
            "Pension investments",
        ],
    ),
    (
        "Corporate",
        "HR Svc",
        "Relocation",
        &["Expats-Schools, House", "Relocation Services"],
    ),
    (
        "Corporate",
        "HR Svc",
        "Talent",
        &["Temporary Labour and outsourcing", "Temporary Labour IT"],
    ),
    (
        "Corporate",
        "Office Services and supplies",
        "Office Services and supplies",
        &[
            "Books-Journals & subcriptions",
            "Office Equipment",
            "Office Furniture",
            "Office supplies",
            "Printing and Reproduction Services",
        ],
    ),
    (
        "Corporate",
        "Travel Management",
        "Travel Management",
        &["Air travel", "Other Travel Expense (Visa, Rail, Sea)", "Taxi-Bus-Car hire"],
    ),
    (
        "Corporate",
        "Travel Management",
        "Hotel-Restaurant & Meeting",
        &["Hotel", "Restaurant-Bar Expenses", "Seminars-Conference-Meetings"],
    ),
    (
        "Corporate",
        "Vehicle Hire & Purchase",
        "Vehicle Hire & Purchase",
        &["Vehicle Lease (long term)", "Vehicle Purchase", "Vehicle rental (short term)"],
    ),
    (
        "Corporate",
        "Vehicle Hire & Purchase",
        "Other Vehicle Costs",
        &[
            "Fuel",
            "Telematics",
            "Vehicle maintenance/Fleet management",
            "Vehicle Other Insurance/Tax/Parking",
        ],
    ),
    (
        "Corporate",
        "Insurance",
        "Insurance",
        &["Building & Content Insurance", "Insurance Others"],
    ),
    (
        "Corporate",
        "Politics & Civic Affairs",
        "Politics & Civic Affairs",
        &["Charities", "Membership fees or Tobacco chambers or unions", "Politics & Civic Affairs"],
    ),
    ("Corporate", "Other Agency costs", "Other Agency costs", &["Other Agency costs"]),
    (
        "Corporate",
        "Other Travel Expense",
        "Other Travel Expense",
        &["Other Travel Expense"],
    ),
    (
        "IDT",
        "IT Infrastructure",
        "IT Infrastructure",
        &["Hosting, Public Cloud, Datacentres Infrastructure"],
    ),
    (
        "IDT",
        "IT Infrastructure",
        "Hardware",
        &[
            "Computing/Desktop/Laptops/Handheld",
            "IT Equipment and accessories",
            "IT Hardware Maintenance",
            "Servers and Server Equipment",
        ],
    ),
    (
        "IDT",
        "IT Infrastructure",
        "Networks Hardware",
        &["Audio and Video Hardware", "IT Networks Infrastructure"],
    ),
    ("IDT", "IT Infrastructure", "Networks Services", &["WAN & LAN Services"]),
    (
        "IDT",
        "IT Services",
        "IT Services",
        &["IT Services-End User Computing", "IT Services-End User Printing"],
    ),
    ("IDT", "IT Services", "IT Consultancy", &["IT Consultancy"]),
    (
        "IDT",
        "IT Services",
        "Managed Professional Services",
        &["Managed Professional Services"],
    ),
    (
        "IDT",
        "Software & Application",
        "Software & Application",
        &[
            "Soft & App Develop Corporate Functions",
            "Soft & App Develop Econnected Devices",
            "Soft & App Develop Enterprise Platforms",
            "Soft & App Develop Marketing D2C",
            "Soft & App Develop Marketing Trade",
            "Soft & App Develop Operations",
            "Soft & App Develop Testing Q&A",
            "Software License",
            "Software Support",
        ],
    ),
    (
        "IDT",
        "Digital Services",
        "Digital Services",
        &[
            "CRM Services (Non-DBS)",
            "Info/Careline/Live Chat/Call Centre",
            "Other Digital Services",
            "Search Engine Optimisation (SEO)",
            "Social Media Management",
        ],
    ),
    ("IDT", "Cyber Security", "Cyber Security", &["Cyber Security"]),
    (
        "IDT",
        "Voice, Communication & Mobile Services",
        "Voice, Communication & Mobile Services",
        &["Voice & Mobile Communication Services"],
    ),
    (
        "R&D",
        "Laboratory Supply",
        "Laboratory Supply",
        &["Laboratory Consumables", "Laboratory Equipment & Supplies"],
    ),
    (
        "R&D",
        "Scientific Services",
        "Scientific Services",
        &["Analytical", "Clinical Studies", "R&D Consultancy", "Research Services"],
    ),
    (
        "R&D",
        "EH&S Equipment and Services",
        "EH&S Equipment and Services",
        &[
            "Agricultural PPEs (Farmers Protection)",
            "Safety Equipment & PPEs (Shoes, Gloves, etc.)",
        ],
    ),
    (
        "R&D",
        "ESG",
        "ESG",
        &[
            "ESG Afforestation",
            "ESG Carbon offsets",
            "ESG IREC GoO/ESG Renewable energy certificates",
            "ESG Solar panels",
        ],
    ),
    ("R&D", "Equipment", "Equipment", &["Production Machinery"]),
];

pub(crate) fn default_geo() -> GeoTable {
    let rows = GEO.iter().flat_map(|(region, cluster, markets)| {
        markets
            .iter()
            .map(move |market| GeoRow::new(*region, *cluster, *market))
    });
    GeoTable::from_rows(rows)
}

pub(crate) fn default_cat() -> CatTable {
    let rows = CAT.iter().flat_map(|(l1, l2, l3, leaves)| {
        leaves.iter().map(move |l4| CatRow::new(*l1, *l2, *l3, *l4))
    });
    CatTable::from_rows(rows)
}
