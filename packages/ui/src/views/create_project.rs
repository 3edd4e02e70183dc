//! "Post a project" form.

use dioxus::prelude::*;
use store::{NewProject, ProjectDraft};

use crate::components::{Button, ButtonSize, ButtonVariant, SkillTag};

#[component]
pub fn CreateProjectView(on_created: EventHandler<NewProject>) -> Element {
    let mut draft = use_signal(ProjectDraft::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut posted = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        posted.set(false);
        let result = draft.read().validate();
        match result {
            Ok(project) => {
                error.set(None);
                draft.write().reset();
                posted.set(true);
                on_created.call(project);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let current = draft();

    rsx! {
        div {
            class: "screen",
            div {
                class: "screen-header",
                h1 { class: "screen-title", "Post a Project" }
            }

            form {
                class: "content",
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    div { class: "error-box", "{err}" }
                }
                if posted() {
                    div { class: "success-box", "Project created!" }
                }

                label { class: "form-label", "Project Title" }
                div {
                    class: "field",
                    input {
                        placeholder: "e.g. Website Redesign",
                        value: "{current.title}",
                        oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                    }
                }

                label { class: "form-label", "Description" }
                div {
                    class: "field",
                    textarea {
                        rows: "4",
                        placeholder: "Describe the work, deliverables and any requirements",
                        value: "{current.description}",
                        oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                    }
                }

                div {
                    class: "row",
                    div {
                        style: "flex: 1;",
                        label { class: "form-label", "Budget ($)" }
                        div {
                            class: "field",
                            input {
                                r#type: "number",
                                min: "0",
                                placeholder: "500",
                                value: "{current.budget}",
                                oninput: move |evt: FormEvent| draft.write().budget = evt.value(),
                            }
                        }
                    }
                    div {
                        style: "flex: 1;",
                        label { class: "form-label", "Duration" }
                        div {
                            class: "field",
                            input {
                                placeholder: "e.g. 2 weeks",
                                value: "{current.duration}",
                                oninput: move |evt: FormEvent| draft.write().duration = evt.value(),
                            }
                        }
                    }
                }

                label { class: "form-label", "Due Date" }
                div {
                    class: "field",
                    input {
                        r#type: "date",
                        value: "{current.due_date}",
                        oninput: move |evt: FormEvent| draft.write().due_date = evt.value(),
                    }
                }

                div {
                    class: "row",
                    style: "justify-content: space-between; margin-bottom: 14px;",
                    label { class: "form-label", "Remote Project" }
                    input {
                        r#type: "checkbox",
                        checked: current.remote,
                        onchange: move |evt: FormEvent| draft.write().remote = evt.checked(),
                    }
                }

                if !current.remote {
                    label { class: "form-label", "Location" }
                    div {
                        class: "field",
                        input {
                            placeholder: "City, Country",
                            value: "{current.location}",
                            oninput: move |evt: FormEvent| draft.write().location = evt.value(),
                        }
                    }
                }

                label { class: "form-label", "Required Skills" }
                div {
                    class: "field",
                    input {
                        placeholder: "Add a skill",
                        value: "{current.skill_input}",
                        oninput: move |evt: FormEvent| draft.write().skill_input = evt.value(),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                evt.prevent_default();
                                draft.write().add_skill();
                            }
                        },
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Sm,
                        onclick: move |_| {
                            draft.write().add_skill();
                        },
                        "Add"
                    }
                }
                div {
                    class: "row wrap",
                    for skill in current.skills() {
                        SkillTag {
                            key: "{skill}",
                            name: skill.clone(),
                            small: true,
                            onclick: move |skill: String| draft.write().remove_skill(&skill),
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Lg,
                    r#type: "submit",
                    "Create Project"
                }
            }
        }
    }
}
