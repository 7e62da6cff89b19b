//! Index description templates
//!
//! A [`DescriptionTemplate`] is the compiler half of a [`MethodComponent`]:
//! a literal keyword followed by an ordered list of decorated parameters.
//! Rendering `HNSW` + `m` + `,encoder` over `{m: 32, encoder: sq}` gives
//! `HNSW32,SQfp16`, the string a faiss-style index factory expects.

use tracing::warn;

use crate::component::MethodComponent;
use crate::context::{EffectiveValue, EffectiveValues};

/// One parameter rendered into the description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribedParameter {
    pub name: String,
    pub prefix: String,
    pub suffix: String,
}

/// Literal keyword plus decorated parameters, rendered in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionTemplate {
    keyword: String,
    parameters: Vec<DescribedParameter>,
}

impl DescriptionTemplate {
    pub fn builder(keyword: impl Into<String>) -> DescriptionTemplateBuilder {
        DescriptionTemplateBuilder {
            template: DescriptionTemplate {
                keyword: keyword.into(),
                parameters: Vec::new(),
            },
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn parameters(&self) -> &[DescribedParameter] {
        &self.parameters
    }

    /// Whether `name` is rendered into the description
    pub fn includes(&self, name: &str) -> bool {
        self.parameters.iter().any(|p| p.name == name)
    }

    /// Render `values` for `component`.
    ///
    /// Nested choices delegate to the chosen alternative's own template.
    /// An alternative without a template contributes nothing, decoration
    /// included.
    pub(crate) fn render(&self, component: &MethodComponent, values: &EffectiveValues) -> String {
        let mut description = self.keyword.clone();

        for described in &self.parameters {
            // Only reachable when `values` were validated against a
            // different component; validation fills every declared parameter.
            let Some(value) = values.get(&described.name) else {
                warn!(
                    component = component.name(),
                    parameter = %described.name,
                    "no effective value for described parameter"
                );
                continue;
            };

            let rendered = match value {
                EffectiveValue::Component(nested) => component
                    .get_parameter(&described.name)
                    .and_then(|p| p.alternative(nested.name()))
                    .and_then(|alternative| alternative.index_description(nested)),
                scalar => Some(scalar.to_string()),
            };

            if let Some(rendered) = rendered {
                description.push_str(&described.prefix);
                description.push_str(&rendered);
                description.push_str(&described.suffix);
            }
        }

        description
    }
}

pub struct DescriptionTemplateBuilder {
    template: DescriptionTemplate,
}

impl DescriptionTemplateBuilder {
    /// Render `name` as `prefix`, value, `suffix`
    pub fn add_parameter(
        mut self,
        name: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        self.template.parameters.push(DescribedParameter {
            name: name.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
        });
        self
    }

    pub fn build(self) -> DescriptionTemplate {
        self.template
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::MethodComponentContext;
    use crate::parameter::Parameter;

    fn pq() -> MethodComponent {
        MethodComponent::builder("pq")
            .add_parameter(Parameter::integer("m", 1, |v| *v > 0).unwrap())
            .add_parameter(Parameter::integer("code_size", 8, |v| *v == 8).unwrap())
            .set_map_generator(
                DescriptionTemplate::builder("PQ")
                    .add_parameter("m", "", "")
                    .add_parameter("code_size", "x", "")
                    .build(),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_template_accessors() {
        let template = DescriptionTemplate::builder("PQ")
            .add_parameter("m", "", "")
            .add_parameter("code_size", "x", "")
            .build();

        assert_eq!(template.keyword(), "PQ");
        assert_eq!(template.parameters().len(), 2);
        assert_eq!(template.parameters()[1].prefix, "x");
        assert!(template.includes("code_size"));
        assert!(!template.includes("clip"));
    }

    #[test]
    fn test_scalar_decoration() {
        let pq = pq();
        let values = pq
            .validate(&MethodComponentContext::new("pq").with_parameter("m", 4))
            .unwrap();
        assert_eq!(pq.index_description(&values).as_deref(), Some("PQ4x8"));
    }

    #[test]
    fn test_nested_template_with_suffix() {
        let flat = MethodComponent::builder("flat").build().unwrap();
        let ivf = MethodComponent::builder("ivf")
            .add_parameter(Parameter::integer("nlist", 4, |v| *v > 0).unwrap())
            .add_parameter(
                Parameter::method_component_context(
                    "encoder",
                    MethodComponentContext::new("flat"),
                    vec![flat, pq()],
                )
                .unwrap(),
            )
            .set_map_generator(
                DescriptionTemplate::builder("IVF")
                    .add_parameter("nlist", "", "")
                    .add_parameter("encoder", ",", "!")
                    .build(),
            )
            .build()
            .unwrap();

        let with_pq = ivf
            .validate(
                &MethodComponentContext::new("ivf")
                    .with_parameter("encoder", MethodComponentContext::new("pq").with_parameter("m", 2)),
            )
            .unwrap();
        assert_eq!(ivf.index_description(&with_pq).as_deref(), Some("IVF4,PQ2x8!"));

        // flat has no template, so neither the separator nor the suffix appear
        let with_flat = ivf.validate(&MethodComponentContext::new("ivf")).unwrap();
        assert_eq!(ivf.index_description(&with_flat).as_deref(), Some("IVF4"));
    }
}
