use gusweb::application::{chrome::ChromeService, page::PageService};
use gusweb::config::SiteSettings;
use gusweb::domain::pages::ABOUT;
use gusweb::presentation::views::PageMetaView;

const CONTACT_LINK: &str = r#"<a href="mailto:webmaster@gusdb.org">webmaster@gusdb.org</a>"#;

fn page_service() -> PageService {
    PageService::new(ChromeService::new(SiteSettings::default())).expect("valid catalogue")
}

fn about_body(service: &PageService) -> String {
    let view = service.page_view("about").expect("about page");
    service.render_body(&view).expect("render body")
}

fn section<'a>(body: &'a str, id: &str) -> &'a str {
    let open = format!(r#"<section id="{id}">"#);
    let start = body.find(&open).expect("section start");
    let end = body[start..].find("</section>").expect("section end") + start;
    &body[start..end]
}

#[test]
fn document_is_header_then_body_then_footer() {
    let service = page_service();
    let document = service.render("about").expect("render").expect("about page");

    let frame = service.frame(PageMetaView {
        title: "About GUS".to_string(),
        path: "/about.html".to_string(),
    });
    let header = frame.header().expect("header");
    let footer = frame.footer().expect("footer");
    let body = about_body(&service);

    assert_eq!(document, format!("{header}{body}{footer}"));
    assert!(header.contains("<title>About GUS | GUSdb</title>"));
    assert!(footer.trim_end().ends_with("</html>"));
}

#[test]
fn rendering_is_idempotent() {
    let service = page_service();
    let first = service.render("about").expect("render").expect("about page");
    let second = service.render("about").expect("render").expect("about page");
    assert_eq!(first, second);

    let other = page_service().render("about").expect("render").expect("about page");
    assert_eq!(first, other);
}

#[test]
fn every_hyperlink_round_trips() {
    let body = about_body(&page_service());

    let links = ABOUT.links();
    assert!(links.len() >= 15);
    for link in links {
        let href = link.href.expect("links carry a destination");
        let anchor = format!(r#"<a href="{href}">{}</a>"#, link.label);
        assert!(body.contains(&anchor), "missing anchor {anchor}");
    }

    for (label, href) in [
        ("GeneDB", "http://www.genedb.org"),
        ("TcruziDB", "http://www.tcruzidb.org"),
        ("CryptoDB", "http://www.cryptodb.org"),
        ("BiowebDB", "http://www.biowebdb.org"),
        ("PlasmoDB.org", "http://www.plasmodb.org"),
        ("EPConDB", "http://www.cbil.upenn.edu/EPConDB/"),
        ("RAD", "http://www.cbil.upenn.edu/RAD"),
        ("Allgenes.org", "http://www.allgenes.org/"),
    ] {
        assert!(body.contains(&format!(r#"<a href="{href}">{label}</a>"#)));
    }
}

#[test]
fn groups_render_fourteen_items_in_order() {
    let body = about_body(&page_service());
    let groups = section(&body, "groups");

    assert_eq!(groups.matches("<li>").count(), 14);

    let labels: Vec<_> = ABOUT
        .section("groups")
        .expect("groups section")
        .entries()
        .map(|entry| entry.label)
        .collect();
    assert_eq!(labels.len(), 14);

    let mut cursor = 0;
    for label in labels {
        let offset = groups[cursor..]
            .find(label)
            .unwrap_or_else(|| panic!("{label} out of order"));
        cursor += offset + label.len();
    }
}

#[test]
fn contact_link_appears_twice_in_body() {
    let body = about_body(&page_service());
    assert_eq!(body.matches(CONTACT_LINK).count(), 2);
    assert_eq!(section(&body, "groups").matches(CONTACT_LINK).count(), 1);
    assert_eq!(section(&body, "collaborators").matches(CONTACT_LINK).count(), 1);
}

#[test]
fn emphasized_entries_bold_the_primary_link_only() {
    let body = about_body(&page_service());
    assert!(body.contains(
        r#"<li><strong><a href="http://www.tcruzidb.org">TcruziDB</a></strong>, <a href="http://www.cryptodb.org">CryptoDB</a> -- Storing"#
    ));
    assert!(body.contains(
        "<li><strong>Penn Bioinformatics Core Facility</strong> -- University of Pennsylvania</li>"
    ));
}

#[test]
fn collaborators_render_as_roster() {
    let body = about_body(&page_service());
    let collaborators = section(&body, "collaborators");
    assert!(collaborators.contains(
        r#"<li><a href="https://www.vbi.vt.edu/">VBI</a>: Fidel Sals, Sucheta Tripathy</li>"#
    ));
    assert!(!collaborators.contains("<strong>"));
}

#[test]
fn sections_keep_source_order() {
    let body = about_body(&page_service());
    let positions: Vec<_> = ["Overview", "Groups Using GUS", "Collaborators", "Related Projects"]
        .into_iter()
        .map(|heading| {
            body.find(&format!("<h2>{heading}</h2>"))
                .unwrap_or_else(|| panic!("missing heading {heading}"))
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn related_projects_keep_their_own_separators() {
    let body = about_body(&page_service());
    let related = section(&body, "related");
    assert!(related.contains(
        r#"<li><a href="http://www.gmod.org/">gmod.org</a> - Generic Model Organism Database</li>"#
    ));
    assert!(related.contains(
        r#"<li><a href="http://fuge.sourceforge.net/">FuGE</a> -- Standards efforts related to functional genomics investigations</li>"#
    ));
    assert!(!related.contains("gmod.org</a> -- "));
}
