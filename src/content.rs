//! Static page content and the section anchors it hangs off.
//!
//! Everything in here is baked into the binary. The only thing the rest of
//! the crate may assume about it is what the tests at the bottom enforce:
//! unique ids, anchors that exist in the page, and asset names the manifest
//! knows about.

/// In-page anchors. These strings are part of the URL contract (`/#cli`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Scientist,
    Publications,
    Blender,
    Cli,
    Teaching,
    Contact,
}

impl SectionId {
    /// Page order. The root component renders sections in exactly this order.
    pub const ALL: [SectionId; 8] = [
        Self::Home,
        Self::About,
        Self::Scientist,
        Self::Publications,
        Self::Blender,
        Self::Cli,
        Self::Teaching,
        Self::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Scientist => "scientist",
            Self::Publications => "publications",
            Self::Blender => "blender",
            Self::Cli => "cli",
            Self::Teaching => "teaching",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About Me",
            Self::Scientist => "Career & Education",
            Self::Publications => "Publications",
            Self::Blender => "Blender Art",
            Self::Cli => "CLI Tools",
            Self::Teaching => "Teaching",
            Self::Contact => "Contact",
        }
    }

    /// Id of the section heading, referenced by the section's `aria-labelledby`.
    pub fn title_id(self) -> String {
        format!("{}-title", self.anchor())
    }

    pub fn from_anchor(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.anchor() == value)
    }

    /// Accepts `#cli`, `cli` or an empty hash.
    pub fn from_hash(hash: &str) -> Option<Self> {
        let trimmed = hash.trim().trim_start_matches('#');
        if trimmed.is_empty() {
            return None;
        }
        Self::from_anchor(trimmed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub id: SectionId,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 8] = [
    NavLink { id: SectionId::Home, label: "Home" },
    NavLink { id: SectionId::About, label: "About Me" },
    NavLink { id: SectionId::Scientist, label: "Career & Education" },
    NavLink { id: SectionId::Publications, label: "Publications" },
    NavLink { id: SectionId::Blender, label: "Blender Art" },
    NavLink { id: SectionId::Cli, label: "CLI Tools" },
    NavLink { id: SectionId::Teaching, label: "Teaching" },
    NavLink { id: SectionId::Contact, label: "Contact" },
];

/// Icon glyphs come from the Font Awesome stylesheet loaded by `index.html`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Atom,
    Briefcase,
    Chalkboard,
    Cube,
    Envelope,
    Flask,
    Github,
    GraduationCap,
    Linkedin,
    Microscope,
    Orcid,
    Scholar,
    Terminal,
    User,
    Book,
    Dna,
    Gauge,
    FilePdf,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Self::Atom => "fa-solid fa-atom",
            Self::Briefcase => "fa-solid fa-briefcase",
            Self::Chalkboard => "fa-solid fa-chalkboard-user",
            Self::Cube => "fa-solid fa-cube",
            Self::Envelope => "fa-solid fa-envelope",
            Self::Flask => "fa-solid fa-flask",
            Self::Github => "fa-brands fa-github",
            Self::GraduationCap => "fa-solid fa-graduation-cap",
            Self::Linkedin => "fa-brands fa-linkedin",
            Self::Microscope => "fa-solid fa-microscope",
            Self::Orcid => "fa-brands fa-orcid",
            Self::Scholar => "fa-brands fa-google-scholar",
            Self::Terminal => "fa-solid fa-terminal",
            Self::User => "fa-solid fa-user",
            Self::Book => "fa-solid fa-book-open",
            Self::Dna => "fa-solid fa-dna",
            Self::Gauge => "fa-solid fa-gauge-high",
            Self::FilePdf => "fa-solid fa-file-pdf",
        }
    }
}

pub struct HeroContent {
    pub name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: &'static str,
    pub profile_image: &'static str,
    pub profile_alt: &'static str,
    pub cv_label: &'static str,
    pub cv_href: &'static str,
}

pub const HERO: HeroContent = HeroContent {
    name: "Dr. Mira Castellan",
    title: "Computational biophysicist & 3D artist",
    subtitle: "Molecular simulation, scientific software and Blender",
    body: "I study how proteins fold, bind and misbehave using large-scale molecular dynamics, \
           and I build the command-line tooling and the pictures that make those simulations \
           understandable. This page collects my research, my art and the small tools I share.",
    profile_image: "profile",
    profile_alt: "Portrait of Mira Castellan",
    cv_label: "Download CV",
    cv_href: "/assets/cv/mira-castellan-cv.pdf",
};

pub struct AboutContent {
    pub paragraphs: &'static [&'static str],
    pub interests: &'static [&'static str],
}

pub const ABOUT: AboutContent = AboutContent {
    paragraphs: &[
        "I trained as a physicist and drifted toward biology the moment I watched my first \
         trajectory of a protein breathing in water. Since then most of my working days are \
         spent between simulation engines, analysis notebooks and a terminal.",
        "In the evenings the same curiosity turns into 3D art. Blender started as a way to \
         make better figures for papers and became a practice of its own: lighting studies, \
         procedural materials and the occasional abstract piece.",
        "I care about reproducible science, small sharp tools and explaining hard ideas \
         without dumbing them down.",
    ],
    interests: &[
        "Molecular dynamics",
        "Enhanced sampling",
        "Rust & Python tooling",
        "Procedural shading",
        "Science communication",
    ],
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub id: u32,
    pub role: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub more_details: Option<&'static str>,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        id: 1,
        role: "Postdoctoral Researcher",
        institution: "Institute for Structural Biology, Heidelberg",
        duration: "2022 – present",
        description: "Enhanced-sampling simulations of membrane transporters and the software \
                      that keeps those campaigns reproducible.",
        icon: Icon::Microscope,
        more_details: Some(
            "Leads a four-person simulation effort on ABC transporters, maintains the group's \
             job orchestration tooling and co-supervises two doctoral students. Introduced \
             containerised analysis pipelines that cut reprocessing time from weeks to hours.",
        ),
    },
    Milestone {
        id: 2,
        role: "PhD in Biophysics",
        institution: "University of Vienna",
        duration: "2017 – 2022",
        description: "Thesis on allosteric communication in kinases using Markov state models.",
        icon: Icon::GraduationCap,
        more_details: Some(
            "Thesis: \"Listening to kinases: allosteric pathways from millisecond simulations\". \
             Awarded with distinction. Visiting researcher at the University of Copenhagen for \
             six months in 2020.",
        ),
    },
    Milestone {
        id: 3,
        role: "Research Software Intern",
        institution: "European Bioinformatics Institute",
        duration: "Summer 2016",
        description: "Built a validation service for deposited structure files.",
        icon: Icon::Briefcase,
        more_details: None,
    },
    Milestone {
        id: 4,
        role: "MSc in Physics",
        institution: "Ludwig Maximilian University of Munich",
        duration: "2014 – 2016",
        description: "Specialisation in statistical physics and soft matter.",
        icon: Icon::Atom,
        more_details: Some(
            "Master's thesis on coarse-grained models of lipid bilayers. Teaching assistant for \
             Statistical Mechanics I and II.",
        ),
    },
    Milestone {
        id: 5,
        role: "BSc in Physics",
        institution: "University of Bologna",
        duration: "2011 – 2014",
        description: "Undergraduate studies with a minor in computer science.",
        icon: Icon::Flask,
        more_details: None,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Publication {
    pub id: u32,
    pub title: &'static str,
    pub authors: &'static str,
    pub journal: &'static str,
    pub year: u16,
    pub doi: &'static str,
    pub link: &'static str,
    pub note: Option<&'static str>,
}

pub const PUBLICATIONS: &[Publication] = &[
    Publication {
        id: 1,
        title: "Conformational gating of substrate release in a bacterial ABC exporter",
        authors: "M. Castellan, J. Okafor, L. Brandt, S. Weiss",
        journal: "Nature Communications",
        year: 2024,
        doi: "10.1038/s41467-024-00001-x",
        link: "https://doi.org/10.1038/s41467-024-00001-x",
        note: Some("Cover article"),
    },
    Publication {
        id: 2,
        title: "Reproducible enhanced-sampling campaigns with declarative workflows",
        authors: "M. Castellan, T. Nguyen, S. Weiss",
        journal: "Journal of Chemical Theory and Computation",
        year: 2023,
        doi: "10.1021/acs.jctc.3c00002",
        link: "https://doi.org/10.1021/acs.jctc.3c00002",
        note: None,
    },
    Publication {
        id: 3,
        title: "Allosteric pathways in Abl kinase resolved by Markov state models",
        authors: "M. Castellan, P. Horvath, K. Lindorff",
        journal: "Biophysical Journal",
        year: 2021,
        doi: "10.1016/j.bpj.2021.00003",
        link: "https://doi.org/10.1016/j.bpj.2021.00003",
        note: Some("Equal contribution of the first two authors"),
    },
    Publication {
        id: 4,
        title: "Millisecond dynamics of the activation loop from distributed simulations",
        authors: "P. Horvath, M. Castellan, K. Lindorff",
        journal: "PLOS Computational Biology",
        year: 2020,
        doi: "10.1371/journal.pcbi.2020004",
        link: "https://doi.org/10.1371/journal.pcbi.2020004",
        note: None,
    },
    Publication {
        id: 5,
        title: "Coarse-grained lipid models under mechanical stress",
        authors: "M. Castellan, R. Vogel",
        journal: "Soft Matter",
        year: 2017,
        doi: "10.1039/c7sm00005a",
        link: "https://doi.org/10.1039/c7sm00005a",
        note: Some("Based on the MSc thesis"),
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub artistic_statement: Option<&'static str>,
    /// Logical asset name, resolved through [`crate::assets`].
    pub main_image: &'static str,
    pub gallery_images: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Scientific Visualization",
        description: "Renders of simulation snapshots: transporters embedded in membranes, \
                      solvent shells and electrostatic surfaces, lit and shaded in Blender from \
                      trajectories exported with a small Python bridge.",
        artistic_statement: Some(
            "Figures in papers are usually an afterthought. I wanted molecules to look like \
             the physical objects they are, with weight, translucency and depth, while staying \
             faithful to the coordinates they come from.",
        ),
        main_image: "scivis-main",
        gallery_images: &["scivis-1", "scivis-2", "scivis-3", "scivis-4"],
    },
    Project {
        id: 2,
        title: "Procedural Landscapes",
        description: "Terrain, erosion and atmosphere built entirely from geometry and shader \
                      nodes.",
        artistic_statement: None,
        main_image: "landscape-main",
        gallery_images: &["landscape-1", "landscape-2", "landscape-3"],
    },
    Project {
        id: 3,
        title: "Abstract Light Studies",
        description: "Short exercises in caustics, volumetrics and colour.",
        artistic_statement: Some("Every piece starts from a single light and a question."),
        main_image: "abstract-main",
        gallery_images: &["abstract-1", "abstract-2"],
    },
    Project {
        id: 4,
        title: "Lab Equipment Product Shots",
        description: "Studio-style renders of a custom microfluidics rig.",
        artistic_statement: None,
        main_image: "product-main",
        gallery_images: &["product-1"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CliTool {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub code_example: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub github_link: &'static str,
}

pub const CLI_TOOLS: &[CliTool] = &[
    CliTool {
        id: 1,
        title: "trajslice",
        description: "Streams frames out of multi-gigabyte trajectories by time window, \
                      selection or stride without loading the whole file.",
        icon: Icon::Terminal,
        code_example: Some("trajslice run.xtc --top sys.gro --from 50ns --to 80ns --sel protein"),
        tags: &["Rust", "MD", "I/O"],
        github_link: "https://github.com/mcastellan/trajslice",
    },
    CliTool {
        id: 2,
        title: "msmctl",
        description: "Builds, validates and compares Markov state models from featurised \
                      trajectories with one declarative config.",
        icon: Icon::Dna,
        code_example: Some("msmctl build --config kinase.toml --lag 10ns"),
        tags: &["Python", "MSM", "Analysis"],
        github_link: "https://github.com/mcastellan/msmctl",
    },
    CliTool {
        id: 3,
        title: "queuewatch",
        description: "A terminal dashboard for SLURM queues that highlights stuck or failing \
                      simulation jobs.",
        icon: Icon::Gauge,
        code_example: None,
        tags: &["Rust", "HPC", "TUI"],
        github_link: "https://github.com/mcastellan/queuewatch",
    },
    CliTool {
        id: 4,
        title: "blendmol",
        description: "Exports PDB and trajectory frames into Blender scenes with materials \
                      per chain and residue type.",
        icon: Icon::Cube,
        code_example: Some("blendmol scene 4HHB.pdb --style cartoon --out hemoglobin.blend"),
        tags: &["Python", "Blender", "Visualization"],
        github_link: "https://github.com/mcastellan/blendmol",
    },
];

pub struct TeachingContent {
    pub narrative: &'static str,
    pub bullets: &'static [&'static str],
    pub link_label: &'static str,
    pub link_href: &'static str,
}

pub const TEACHING: TeachingContent = TeachingContent {
    narrative: "Teaching keeps my own understanding honest. I run hands-on workshops on \
                molecular simulation and research software for graduate students.",
    bullets: &[
        "Practical Molecular Dynamics, graduate workshop (2023, 2024)",
        "Software Carpentry instructor: shell, Git and Python",
        "Guest lectures on Markov state models",
        "Co-supervision of two doctoral and three master's theses",
    ],
    link_label: "Workshop materials",
    link_href: "https://github.com/mcastellan/md-workshop",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactAction {
    pub href: &'static str,
    pub initial_label: &'static str,
    pub hover_label: &'static str,
    pub initial_color: &'static str,
    pub hover_color: &'static str,
    pub is_external: bool,
    pub aria_label: &'static str,
    pub icon: Icon,
}

pub const CONTACT_ACTIONS: &[ContactAction] = &[
    ContactAction {
        href: "mailto:mira.castellan@example.org",
        initial_label: "Email",
        hover_label: "Say hello",
        initial_color: "bg-sky-600",
        hover_color: "bg-sky-700",
        is_external: false,
        aria_label: "Send an email to Mira Castellan",
        icon: Icon::Envelope,
    },
    ContactAction {
        href: "https://github.com/mcastellan",
        initial_label: "GitHub",
        hover_label: "See the code",
        initial_color: "bg-gray-800",
        hover_color: "bg-gray-900",
        is_external: true,
        aria_label: "Open Mira Castellan's GitHub profile",
        icon: Icon::Github,
    },
    ContactAction {
        href: "https://www.linkedin.com/in/mcastellan",
        initial_label: "LinkedIn",
        hover_label: "Connect",
        initial_color: "bg-blue-700",
        hover_color: "bg-blue-800",
        is_external: true,
        aria_label: "Open Mira Castellan's LinkedIn profile",
        icon: Icon::Linkedin,
    },
    ContactAction {
        href: "https://orcid.org/0000-0002-0000-0000",
        initial_label: "ORCID",
        hover_label: "Research record",
        initial_color: "bg-lime-600",
        hover_color: "bg-lime-700",
        is_external: true,
        aria_label: "Open Mira Castellan's ORCID record",
        icon: Icon::Orcid,
    },
    ContactAction {
        href: "https://scholar.google.com/citations?user=mcastellan",
        initial_label: "Scholar",
        hover_label: "Citations",
        initial_color: "bg-indigo-600",
        hover_color: "bg-indigo-700",
        is_external: true,
        aria_label: "Open Mira Castellan's Google Scholar page",
        icon: Icon::Scholar,
    },
];

pub const FOOTER_CREDIT: &str = "Mira Castellan. Built with Rust and Yew.";
