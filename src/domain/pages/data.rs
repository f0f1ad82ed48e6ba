use super::{Block, Inline, Link, ListEntry, ListStyle, Page, Section};

const CONTACT: Link = Link::to("webmaster@gusdb.org", "mailto:webmaster@gusdb.org");

pub static PAGES: [Page; 1] = [ABOUT];

pub const ABOUT: Page = Page {
    slug: "about",
    title: "About GUS",
    sections: &[
        Section {
            id: "overview",
            heading: "Overview",
            blocks: &[
                Block::Paragraph(&[Inline::Text(
                    "The Genomics Unified Schema (GUS) is an extensive relational database schema and associated application framework designed to store, integrate, analyze and present functional genomics data.  The GUS schema supports a wide range of data types including genomics, gene expression, transcript assemblies, proteomics and others.  It emphasizes standards-based ontologies and strong-typing.",
                )]),
                Block::Paragraph(&[Inline::Text(
                    "The GUS Application Framework offers an object-relational layer and a Plugin API used to rapidly create robust data loading programs for diverse data sources.  The GUS distribution includes plugins for standard data sources.  The GUS Web Development Kit (WDK) is a rich environment for efficiently designing sophisticated query-based websites with little programming required.",
                )]),
            ],
        },
        Section {
            id: "groups",
            heading: "Groups Using GUS",
            blocks: &[
                Block::List {
                    style: ListStyle::Emphasized,
                    entries: GROUPS,
                },
                Block::Paragraph(&[
                    Inline::Text(
                        "If we've incorrectly omitted or included your group in the above list, please contact ",
                    ),
                    Inline::Link(CONTACT),
                ]),
            ],
        },
        Section {
            id: "collaborators",
            heading: "Collaborators",
            blocks: &[
                Block::Paragraph(&[Inline::Text(
                    "GUS is an open source project developed, maintained, and supported by:",
                )]),
                Block::List {
                    style: ListStyle::Roster,
                    entries: COLLABORATORS,
                },
                Block::Paragraph(&[
                    Inline::Text(
                        "If we've incorrectly omitted or included you in the above list, please contact ",
                    ),
                    Inline::Link(CONTACT),
                ]),
            ],
        },
        Section {
            id: "related",
            heading: "Related Projects",
            blocks: &[Block::List {
                style: ListStyle::Plain,
                entries: RELATED,
            }],
        },
    ],
};

const CBIL: Option<&str> = Some("CBIL");

const GROUPS: &[ListEntry] = &[
    ListEntry {
        label: "GeneDB",
        href: Some("http://www.genedb.org"),
        companions: &[],
        separator: None,
        description: "Houses the pathogen sequences and annotation generated by PSU",
        affiliation: Some("Pathogen Sequencing Unit (PSU), Wellcome Trust Sanger Institute"),
    },
    ListEntry {
        label: "TcruziDB",
        href: Some("http://www.tcruzidb.org"),
        companions: &[Link::to("CryptoDB", "http://www.cryptodb.org")],
        separator: None,
        description: "Storing and analyzing data for Trypanosoma cruzi, Cryptosporidium parvum and Perkinsus marinus, and a comparative genomics database for apicomplexan parasites called ApiDB",
        affiliation: None,
    },
    ListEntry {
        label: "Centromere Analysis System",
        href: None,
        companions: &[],
        separator: None,
        description: "An investigation of centromere structure and function in plants.  Stores sequence data produced locally, warehouses public data for analysis and store analysis results along with the primary sequence data",
        affiliation: Some("Pruess Lab, University of Chicago and Terry Clark, University of Kansas"),
    },
    ListEntry {
        label: "Phytophthora Genome Project",
        href: None,
        companions: &[],
        separator: None,
        description: "Releasing the 30,000 EST sequences and 8x genome sequences of P.sojae and provide complete annotation to the user community.  It also provides an annotator's interface.",
        affiliation: Some(
            "Virginia Bioinformatics Institute (VBI) and the DOE Joint Genome Institute",
        ),
    },
    ListEntry {
        label: "Microarray and QTL Dissection of Quantitative Resistance in Soybean Against P.sojae",
        href: None,
        companions: &[],
        separator: None,
        description: "Analyzing the P.sojae infection and quantitative resistance in Soybean plants with microarray and QTL techniques.",
        affiliation: Some("VBI and Ohio State"),
    },
    ListEntry {
        label: "Cross-kingdom comparative genomics of pathogens, including Phytophtora and malaria",
        href: None,
        companions: &[],
        separator: None,
        description: "Currently the project is comparing the oxidative stress response in organisms from four different kingdoms, yeast (fungi), Arabidopsis (plants), Phytophthora (oomycetes) and malaria (apicomplexans) in order to learn rules for cross-kingdom comparative genomics.",
        affiliation: Some("VBI"),
    },
    ListEntry {
        label: "MLB-platform, and open soruce platform for environmental genomics",
        href: None,
        companions: &[],
        separator: None,
        description: "Interfacing GUS to the ERFE-SVM system for predictive classification of microarray data.  Using the GUS schema to provide the experimental microarray data descriptions and phenotype information to covariate with the visual and numerical procedures for subsample and outlier detection.  GIS visualization and analysis will also be developed, based on our open source GIS GRASS system.",
        affiliation: Some("MPBA group of the ITC-irst, Trento, Italy"),
    },
    ListEntry {
        label: "BiowebDB",
        href: Some("http://www.biowebdb.org"),
        companions: &[],
        separator: None,
        description: "A comparative genomics and transcriptomics project aiming to complement GeneDB and TcruziDB, providing a function genomics resource for Trypansoma cruzi, Leishmania brasiliensis and Triatomine.",
        affiliation: Some("Instituto Oswaldo Cruz"),
    },
    ListEntry {
        label: "Penn Bioinformatics Core Facility",
        href: None,
        companions: &[],
        separator: None,
        description: "",
        affiliation: Some("University of Pennsylvania"),
    },
    ListEntry {
        label: "John Maris",
        href: None,
        companions: &[],
        separator: None,
        description: "Studying Array CGH data",
        affiliation: Some("Children's Hospital of Pennsylvania"),
    },
    ListEntry {
        label: "PlasmoDB.org",
        href: Some("http://www.plasmodb.org"),
        companions: &[],
        separator: None,
        description: "A genomic database for the malaria-causing parasite Plasmodium falciparum",
        affiliation: CBIL,
    },
    ListEntry {
        label: "EPConDB",
        href: Some("http://www.cbil.upenn.edu/EPConDB/"),
        companions: &[],
        separator: None,
        description: "The Endocrine Pancreas Consortium web site",
        affiliation: CBIL,
    },
    ListEntry {
        label: "RAD",
        href: Some("http://www.cbil.upenn.edu/RAD"),
        companions: &[],
        separator: None,
        description: "A gene expression database of array-based (microarrays, high-density oligo arrays, macroarrays) and non-array-based (e.g., SAGE) experiments",
        affiliation: CBIL,
    },
    ListEntry {
        label: "Allgenes.org",
        href: Some("http://www.allgenes.org/"),
        companions: &[],
        separator: None,
        description: "A human and mouse gene index derived from assembled ESTs and mRNAs",
        affiliation: CBIL,
    },
];

const COLLABORATORS: &[ListEntry] = &[
    ListEntry {
        label: "CBIL",
        href: Some("http://www.cbil.upenn.edu"),
        companions: &[],
        separator: None,
        description: "Steve Fischer, Michael Saffitz, Chris Stoeckert, Elisabetta Manduchi, Junmin Liu, Trish Whetzel, Jonathan Schugg, Thomas Gan, Debbie Pinney, Jennifer Dommer",
        affiliation: None,
    },
    ListEntry {
        label: "The Kissinger Lab",
        href: Some("http://www.genetics.uga.edu/faculty/bio-kissinger.html"),
        companions: &[],
        separator: None,
        description: "Mark Heiges, Ed Robinson, Jerric Gao, Haiming Wang",
        affiliation: None,
    },
    ListEntry {
        label: "VBI",
        href: Some("https://www.vbi.vt.edu/"),
        companions: &[],
        separator: None,
        description: "Fidel Sals, Sucheta Tripathy",
        affiliation: None,
    },
];

const RELATED: &[ListEntry] = &[
    ListEntry {
        label: "gmod.org",
        href: Some("http://www.gmod.org/"),
        companions: &[],
        separator: Some(" - "),
        description: "Generic Model Organism Database",
        affiliation: None,
    },
    ListEntry {
        label: "FuGE",
        href: Some("http://fuge.sourceforge.net/"),
        companions: &[],
        separator: None,
        description: "Standards efforts related to functional genomics investigations",
        affiliation: None,
    },
];
