use crate::domain::a001_patient::api;
use crate::domain::a001_patient::ui::details::PatientDetails;
use crate::shared::date_utils::format_date;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::modal::ConfirmModal;
use crate::shared::notice::{alert, flash, ErrorBanner, SuccessBanner};
use contracts::domain::a001_patient::aggregate::Patient;
use leptos::prelude::*;
use thaw::*;

impl Searchable for Patient {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.nombre.as_str(), self.apellido.as_str(), self.dni.as_str()]
    }

    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        needle.is_empty()
            || self.full_name().to_lowercase().contains(&needle)
            || self.dni.to_lowercase().contains(&needle)
    }
}

impl CsvExportable for Patient {
    fn headers() -> Vec<&'static str> {
        vec![
            "Apellido",
            "Nombre",
            "DNI",
            "Teléfono",
            "Email",
            "Fecha de nacimiento",
            "Obra social",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.apellido.clone(),
            self.nombre.clone(),
            self.dni.clone(),
            self.telefono.clone(),
            self.email.clone().unwrap_or_default(),
            self.fecha_nacimiento
                .as_deref()
                .map(format_date)
                .unwrap_or_default(),
            self.obra_social.clone().unwrap_or_default(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Editor {
    Closed,
    New,
    Edit(Patient),
}

#[component]
#[allow(non_snake_case)]
pub fn PatientList() -> impl IntoView {
    let items = RwSignal::new(Vec::<Patient>::new());
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);
    let filter = RwSignal::new(String::new());
    let editor = RwSignal::new(Editor::Closed);
    let pending_delete = RwSignal::new(Option::<Patient>::None);
    let loading = RwSignal::new(false);

    let fetch = move || {
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_patients().await {
                Ok(v) => {
                    log::debug!("loaded {} patients", v.len());
                    items.set(v);
                    error.set(None);
                }
                Err(e) => {
                    items.set(Vec::new());
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };
    fetch();

    let filtered = move || filter_list(&items.get(), &filter.get());

    let on_saved = Callback::new(move |_| {
        let was_new = editor.get_untracked() == Editor::New;
        editor.set(Editor::Closed);
        flash(
            notice,
            if was_new { "Paciente creado" } else { "Paciente actualizado" },
        );
        fetch();
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(patient) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_patient(&patient.id).await {
                Ok(()) => {
                    flash(notice, format!("Se eliminó a {}", patient.full_name()));
                    fetch();
                }
                Err(e) => alert(&format!("No se pudo eliminar el paciente: {}", e)),
            }
        });
    });

    let export = move |_| {
        if let Err(e) = export_to_csv(&filtered(), "pacientes.csv") {
            alert(&e);
        }
    };

    view! {
        <div class="module-page">
            <div class="module-header">
                <h2>"Pacientes"</h2>
                <Space>
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |v| filter.set(v))
                        placeholder="Buscar por nombre o DNI"
                    />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editor.set(Editor::New)>
                        {icon("plus")} " Nuevo paciente"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=export>
                        {icon("download")} " Exportar CSV"
                    </Button>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| fetch()>
                        {icon("refresh")}
                    </Button>
                </Space>
            </div>

            <ErrorBanner message=error />
            <SuccessBanner message=notice />

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Paciente"</TableHeaderCell>
                        <TableHeaderCell>"DNI"</TableHeaderCell>
                        <TableHeaderCell>"Teléfono"</TableHeaderCell>
                        <TableHeaderCell>"Email"</TableHeaderCell>
                        <TableHeaderCell>"Nacimiento"</TableHeaderCell>
                        <TableHeaderCell>"Obra social"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = filtered();
                        if rows.is_empty() {
                            let text = if loading.get() { "Cargando..." } else { "No hay pacientes para mostrar" };
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="7" class="table__empty">{text}</TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|p| {
                                let for_edit = p.clone();
                                let for_delete = p.clone();
                                let full_name = p.full_name();
                                let dni = p.dni.clone();
                                let telefono = p.telefono.clone();
                                let email = p.email.clone().unwrap_or_else(|| "-".to_string());
                                let fecha_nacimiento = p.fecha_nacimiento.as_deref().map(format_date).unwrap_or_else(|| "-".to_string());
                                let obra_social = p.obra_social.clone().unwrap_or_else(|| "-".to_string());
                                view! {
                                    <TableRow>
                                        <TableCell>{full_name}</TableCell>
                                        <TableCell>{dni}</TableCell>
                                        <TableCell>{telefono}</TableCell>
                                        <TableCell>{email}</TableCell>
                                        <TableCell>
                                            {fecha_nacimiento}
                                        </TableCell>
                                        <TableCell>{obra_social}</TableCell>
                                        <TableCell>
                                            <Space>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editor.set(Editor::Edit(for_edit.clone()))
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| pending_delete.set(Some(for_delete.clone()))
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </Space>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>

            {move || {
                let existing = match editor.get() {
                    Editor::Closed => return None,
                    Editor::New => None,
                    Editor::Edit(p) => Some(p),
                };
                Some(view! {
                    <PatientDetails
                        existing=existing
                        on_saved=on_saved
                        on_cancel=Callback::new(move |_| editor.set(Editor::Closed))
                    />
                })
            }}

            {move || pending_delete.get().map(|p| view! {
                <ConfirmModal
                    title="Eliminar paciente"
                    message=format!("¿Eliminar a {} (DNI {})? Esta acción no se puede deshacer.", p.full_name(), p.dni)
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| pending_delete.set(None))
                />
            })}
        </div>
    }
}
