//! Static snippet tables behind class-body completions.
//!
//! Ids are grouped by hundreds: 1xx decorators, 2xx lifecycle methods,
//! 3xx plain methods. Templates may contain `{{computedProps}}` and
//! `{{componentTag}}`, which the resolver substitutes.

#[derive(Debug)]
pub struct Snippet {
    pub id: u32,
    pub label: &'static str,
    pub description: &'static [&'static str],
    pub body: &'static [&'static str],
    pub preview: &'static [&'static str],
    /// Comma-separated names to import from the framework module.
    pub auto_import: Option<&'static str>,
}

impl Snippet {
    pub fn body_text(&self) -> String {
        self.body.join("\n")
    }

    pub fn description_text(&self) -> String {
        self.description.join("\n")
    }

    pub fn preview_text(&self) -> String {
        self.preview.join("\n")
    }
}

pub const DECORATORS: &[Snippet] = &[
    Snippet {
        id: 100,
        label: "Prop",
        description: &["The `@Prop()` decorator exposes custom attribute/properties publicly on the element, so that developers can provide values to the component."],
        body: &["@Prop() ${1:propName}: ${2|any,string,boolean,number|};"],
        preview: &["@Prop() propName: any;"],
        auto_import: Some("Prop"),
    },
    Snippet {
        id: 101,
        label: "Watch",
        description: &["When a user updates a property, `@Watch()` will fire what ever method it's attached to and pass that method the new value of the prop along with the old value."],
        body: &[
            "@Watch('${1{{computedProps}}}')",
            "${1}Changed() {",
            "\t${2:console.log('$1 changed to ', this.$1);}$0",
            "}",
        ],
        preview: &[
            "@Watch('propName')",
            "propNameChanged() {",
            "\tconst { propName } = this;",
            "\tconsole.log('propName changed to ', propName);",
            "}",
        ],
        auto_import: Some("Watch"),
    },
    Snippet {
        id: 102,
        label: "State",
        description: &["The `@State()` decorator can be used to manage internal data for a component. Any changes to a `@State()` property will cause the components render function to be called again."],
        body: &["@State() ${1:stateName}: ${2|any,string,boolean,number|};"],
        preview: &["@State() stateName: any"],
        auto_import: Some("State"),
    },
    Snippet {
        id: 103,
        label: "Method",
        description: &["The `@Method()` decorator is used to expose methods on the public API. Functions decorated with the `@Method()` decorator can be called directly from the element."],
        body: &["@Method()", "${1:methodName}($2) {", "\t$0", "}"],
        preview: &["@Method()", "methodName() {", "\t", "}"],
        auto_import: Some("Method"),
    },
    Snippet {
        id: 104,
        label: "Element",
        description: &["The `@Element()` decorator is how to get access to the host element within the class instance. This returns an instance of `HTMLElement`, so standard DOM methods/events can be used here."],
        body: &["@Element() ${1:element}: HTMLElement;"],
        preview: &["@Element() element: HTMLElement;"],
        auto_import: Some("Element"),
    },
    Snippet {
        id: 105,
        label: "Event",
        description: &["The `@Event()` decorator allows a Component to dispatch Custom DOM events for other components to handle."],
        body: &["@Event() ${1:eventName}: EventEmitter<${2:any}>;"],
        preview: &["@Event() eventName: EventEmitter<any>;"],
        auto_import: Some("Event, EventEmitter"),
    },
    Snippet {
        id: 106,
        label: "Listen",
        description: &["The `Listen()` decorator is for handling events dispatched from @Events."],
        body: &[
            "@Listen('${1:eventName}')",
            "protected ${1}Handler(event) {",
            "\t${2:console.log('Received the \"$1\" event: ', event);}$0",
            "}",
        ],
        preview: &[
            "@Listen('eventName')",
            "protected eventNameHandler(event) {",
            "\tconsole.log('Received the \"eventName\" event: ', event);",
            "}",
        ],
        auto_import: Some("Listen"),
    },
];

pub const LIFECYCLE_METHODS: &[Snippet] = &[
    Snippet {
        id: 200,
        label: "componentWillLoad",
        description: &[
            "The component is about to load and it has not rendered yet.\n",
            "This is the best place to make any data updates before the first render.\n",
            "`componentWillLoad` will only be called once.",
        ],
        body: &[
            "componentWillLoad() {",
            "\t${1:console.log('Component is about to be rendered');}$0",
            "}",
        ],
        preview: &[],
        auto_import: None,
    },
    Snippet {
        id: 201,
        label: "componentDidLoad",
        description: &[
            "The component has loaded and has already rendered.\n",
            "Updating data in this method will cause the component to re-render.\n",
            "`componentDidLoad` will only be called once.",
        ],
        body: &[
            "componentDidLoad() {",
            "\t${1:console.log('Component has been rendered');}$0",
            "}",
        ],
        preview: &[],
        auto_import: None,
    },
    Snippet {
        id: 202,
        label: "componentWillUpdate",
        description: &[
            "The component is about to update and re-render.\n",
            "Called multiple times throughout the life of the component as it updates.\n",
            "`componentWillUpdate` is not called on the first render.",
        ],
        body: &[
            "componentWillUpdate() {",
            "\t${1:console.log('Component will update and re-render');}$0",
            "}",
        ],
        preview: &[],
        auto_import: None,
    },
    Snippet {
        id: 203,
        label: "componentDidUpdate",
        description: &[
            "The component has updated and re-rendered.\n",
            "Called multiple times throughout the life of the component as it updates.\n",
            "`componentDidUpdate` is not called on the first render.",
        ],
        body: &[
            "componentDidUpdate() {",
            "\t${1:console.log('Component did update');}$0",
            "}",
        ],
        preview: &[],
        auto_import: None,
    },
    Snippet {
        id: 204,
        label: "componentDidUnload",
        description: &["The component did unload and the element will be destroyed."],
        body: &[
            "componentDidUnload() {",
            "\t${1:console.log('Component removed from the DOM');}$0",
            "}",
        ],
        preview: &[],
        auto_import: None,
    },
];

pub const METHODS: &[Snippet] = &[
    Snippet {
        id: 300,
        label: "hostData",
        description: &["The `hostData()` method is used to dynamically set host element attributes."],
        body: &["hostData() {", "\treturn {", "\t\t$0", "\t}", "}"],
        preview: &["hostData() {", "\treturn {", "\t\t", "\t}", "}"],
        auto_import: None,
    },
    Snippet {
        id: 301,
        label: "render",
        description: &["The `render()` method is required in order to render the component."],
        body: &[
            "render() {",
            "\treturn (",
            "\t\t<div>",
            "\t\t\t${1:<p>Hello <code>{{componentTag}}</code></p>}$0",
            "\t\t</div>",
            "\t);",
            "}",
        ],
        preview: &[
            "render() {",
            "\treturn (",
            "\t\t<div>",
            "\t\t\t<p>Hello my-component!</p>",
            "\t\t</div>",
            "\t);",
            "}",
        ],
        auto_import: None,
    },
];

/// Exact id match across all tables; a later table wins on collision.
pub fn lookup(id: u32) -> Option<&'static Snippet> {
    LIFECYCLE_METHODS
        .iter()
        .chain(DECORATORS)
        .chain(METHODS)
        .filter(|s| s.id == id)
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use stencil_ls_api::ContentGroup;

    #[test]
    fn ids_are_unique_and_grouped() {
        let all: Vec<&Snippet> = LIFECYCLE_METHODS
            .iter()
            .chain(DECORATORS)
            .chain(METHODS)
            .collect();
        let ids: HashSet<u32> = all.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), all.len());

        assert!(DECORATORS.iter().all(|s| ContentGroup::of(s.id) == Some(ContentGroup::Decorator)));
        assert!(
            LIFECYCLE_METHODS
                .iter()
                .all(|s| ContentGroup::of(s.id) == Some(ContentGroup::LifecycleMethod))
        );
        assert!(METHODS.iter().all(|s| ContentGroup::of(s.id) == Some(ContentGroup::Method)));
    }

    #[test]
    fn decorators_carry_imports() {
        assert!(DECORATORS.iter().all(|s| s.auto_import.is_some()));
        assert_eq!(lookup(105).unwrap().auto_import, Some("Event, EventEmitter"));
    }

    #[test]
    fn lookup_misses_unknown_ids() {
        assert!(lookup(999).is_none());
        assert_eq!(lookup(301).unwrap().label, "render");
    }
}
