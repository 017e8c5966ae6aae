//! HTML building blocks for the two pages
//!
//! Everything interpolated into markup goes through `escape`, product data
//! included.

use std::fmt::Write;

/// Elements the flows read from or write to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    RegistrationForm,
    NameField,
    DescriptionField,
    PriceField,
    ImageField,
    ListingContainer,
    ModalBackground,
    ModalContent,
    ModalName,
    ModalDescription,
    ModalPrice,
    ModalImage,
    ModalClose,
}

impl ElementId {
    /// The `id` attribute used in rendered markup
    pub fn dom_id(self) -> &'static str {
        match self {
            ElementId::RegistrationForm => "formCadastroProduto",
            ElementId::NameField => "produtoNome",
            ElementId::DescriptionField => "produtoDesc",
            ElementId::PriceField => "produtoPreco",
            ElementId::ImageField => "produtoImg",
            ElementId::ListingContainer => "listaProdutos",
            ElementId::ModalBackground => "modalBg",
            ElementId::ModalContent => "modalContent",
            ElementId::ModalName => "modalNome",
            ElementId::ModalDescription => "modalDesc",
            ElementId::ModalPrice => "modalPreco",
            ElementId::ModalImage => "modalImg",
            ElementId::ModalClose => "modalClose",
        }
    }
}

/// Escape text for element content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// An image with an optional load-failure replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub src: String,
    pub alt: String,
    /// Swapped in by the browser if `src` fails to load
    pub fallback: Option<String>,
}

impl Image {
    /// Product image when there is one, placeholder otherwise
    pub fn product_or_placeholder(primary: Option<&str>, alt: &str, placeholder: String) -> Self {
        match primary {
            Some(url) => Self {
                src: url.to_string(),
                alt: alt.to_string(),
                fallback: Some(placeholder),
            },
            None => Self {
                src: placeholder,
                alt: "Sem imagem".to_string(),
                fallback: None,
            },
        }
    }

    pub fn to_html(&self, id: Option<ElementId>) -> String {
        let mut out = String::from("<img");
        if let Some(id) = id {
            let _ = write!(out, " id=\"{}\"", id.dom_id());
        }
        let _ = write!(
            out,
            " src=\"{}\" alt=\"{}\"",
            escape(&self.src),
            escape(&self.alt)
        );
        if let Some(fallback) = &self.fallback {
            let _ = write!(
                out,
                " onerror=\"this.onerror=null;this.src='{}'\"",
                escape(fallback)
            );
        }
        out.push('>');
        out
    }
}

/// Full document shell shared by both pages
pub fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{}</title>\n<link rel=\"stylesheet\" href=\"style.css\">\n</head>\n\
         <body>\n{body}\n</body>\n</html>\n",
        escape(title)
    )
}
