//! Serialization of `<urlset>` and `<sitemapindex>` documents.
//!
//! Output is compact: an XML declaration on its own line, the whole document body on the
//! next line, and a trailing newline.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"><url><loc>https://example.com/a</loc></url></urlset>
//! ```

use chrono::{DateTime, FixedOffset};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::entry::Entry;
use crate::errors::{Result, SitemapError};
use crate::lastmod::format_w3c;

/// Namespace of both sitemap and sitemap index documents.
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Renders a `<urlset>` document. Absent hints produce no element at all.
pub fn render_urlset(entries: &[Entry]) -> Result<Vec<u8>> {
    let mut doc = Document::new("urlset")?;
    for entry in entries {
        doc.start("url")?;
        doc.text_element("loc", entry.loc())?;
        if let Some(lastmod) = entry.lastmod() {
            doc.text_element("lastmod", &lastmod.to_string())?;
        }
        if let Some(changefreq) = entry.changefreq() {
            doc.text_element("changefreq", changefreq.as_str())?;
        }
        if let Some(priority) = entry.priority() {
            doc.text_element("priority", &priority.to_string())?;
        }
        doc.end("url")?;
    }
    doc.finish()
}

/// Renders a `<sitemapindex>` document. Every reference gets the same `lastmod`.
pub fn render_index(references: &[String], lastmod: &DateTime<FixedOffset>) -> Result<Vec<u8>> {
    let lastmod = format_w3c(lastmod);
    let mut doc = Document::new("sitemapindex")?;
    for reference in references {
        doc.start("sitemap")?;
        doc.text_element("loc", reference)?;
        doc.text_element("lastmod", &lastmod)?;
        doc.end("sitemap")?;
    }
    doc.finish()
}

struct Document {
    root: &'static str,
    writer: Writer<Vec<u8>>,
}

impl Document {
    fn new(root: &'static str) -> Result<Self> {
        let mut writer = Writer::new(Vec::new());
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_error)?;
        writer.get_mut().push(b'\n');
        writer
            .write_event(Event::Start(
                BytesStart::new(root).with_attributes([("xmlns", SITEMAP_NAMESPACE)]),
            ))
            .map_err(xml_error)?;
        Ok(Self { root, writer })
    }

    fn start(&mut self, name: &str) -> Result<()> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(xml_error)
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_error)
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.start(name)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_error)?;
        self.end(name)
    }

    fn finish(mut self) -> Result<Vec<u8>> {
        let root = self.root;
        self.end(root)?;
        let mut bytes = self.writer.into_inner();
        bytes.push(b'\n');
        Ok(bytes)
    }
}

fn xml_error(err: impl std::fmt::Display) -> SitemapError {
    SitemapError::XmlError(err.to_string())
}
