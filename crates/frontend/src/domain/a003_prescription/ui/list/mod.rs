use crate::domain::a003_prescription::api;
use crate::domain::a003_prescription::ui::details::PrescriptionDetails;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::modal::ConfirmModal;
use crate::shared::notice::{alert, flash, ErrorBanner, SuccessBanner};
use contracts::domain::a003_prescription::aggregate::Prescription;
use leptos::prelude::*;
use thaw::*;

impl Searchable for Prescription {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.paciente.as_str(), self.medicamento.as_str()]
    }
}

/// Newest first
fn sort_by_date_desc(rows: &mut [Prescription]) {
    rows.sort_by(|a, b| b.fecha.cmp(&a.fecha));
}

#[component]
#[allow(non_snake_case)]
pub fn PrescriptionList() -> impl IntoView {
    let items = RwSignal::new(Vec::<Prescription>::new());
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);
    let filter = RwSignal::new(String::new());
    let creating = RwSignal::new(false);
    let pending_delete = RwSignal::new(Option::<Prescription>::None);
    let loading = RwSignal::new(false);

    let fetch = move || {
        loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_prescriptions().await {
                Ok(mut v) => {
                    log::debug!("loaded {} prescriptions", v.len());
                    sort_by_date_desc(&mut v);
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
        creating.set(false);
        flash(notice, "Receta emitida");
        fetch();
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(prescription) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_prescription(&prescription.id).await {
                Ok(()) => {
                    flash(notice, "Receta eliminada");
                    fetch();
                }
                Err(e) => alert(&format!("No se pudo eliminar la receta: {}", e)),
            }
        });
    });

    view! {
        <div class="module-page">
            <div class="module-header">
                <h2>"Recetas Médicas"</h2>
                <Space>
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |v| filter.set(v))
                        placeholder="Buscar por paciente o medicamento"
                    />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| creating.set(true)>
                        {icon("plus")} " Nueva receta"
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
                        <TableHeaderCell>"Fecha"</TableHeaderCell>
                        <TableHeaderCell>"Paciente"</TableHeaderCell>
                        <TableHeaderCell>"Medicamento"</TableHeaderCell>
                        <TableHeaderCell>"Dosis"</TableHeaderCell>
                        <TableHeaderCell>"Indicaciones"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = filtered();
                        if rows.is_empty() {
                            let text = if loading.get() { "Cargando..." } else { "No hay recetas para mostrar" };
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="6" class="table__empty">{text}</TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|r| {
                                let for_delete = r.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>{format_date(&r.fecha)}</TableCell>
                                        <TableCell>{r.paciente.clone()}</TableCell>
                                        <TableCell>{r.medicamento.clone()}</TableCell>
                                        <TableCell>{r.dosis.clone()}</TableCell>
                                        <TableCell>{r.indicaciones.clone().unwrap_or_else(|| "-".to_string())}</TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| pending_delete.set(Some(for_delete.clone()))
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>

            <Show when=move || creating.get()>
                <PrescriptionDetails
                    on_saved=on_saved
                    on_cancel=Callback::new(move |_| creating.set(false))
                />
            </Show>

            {move || pending_delete.get().map(|r| view! {
                <ConfirmModal
                    title="Eliminar receta"
                    message=format!("¿Eliminar la receta de {} para {}?", r.medicamento, r.paciente)
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| pending_delete.set(None))
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::RecordId;

    fn receta(id: &str, paciente: &str, medicamento: &str, fecha: &str) -> Prescription {
        Prescription {
            id: RecordId::from(id),
            paciente: paciente.into(),
            medicamento: medicamento.into(),
            dosis: "1 cada 8 h".into(),
            indicaciones: None,
            fecha: fecha.into(),
        }
    }

    #[test]
    fn test_search_and_order() {
        let mut rows = vec![
            receta("a1", "Ana Pérez", "Ibuprofeno", "2024-05-01"),
            receta("b2", "Luis Gómez", "Amoxicilina", "2024-06-10"),
        ];
        sort_by_date_desc(&mut rows);
        assert_eq!(rows[0].paciente, "Luis Gómez");

        assert_eq!(filter_list(&rows, "ibu").len(), 1);
        assert_eq!(filter_list(&rows, "gómez")[0].medicamento, "Amoxicilina");
    }
}
