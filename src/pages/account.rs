//! "Meu Cadastro" page: tabbed profile completion form.
//!
//! Three sections (personal, address, banking) with a progress indicator
//! computed from how many fields are filled. The form is local-only; there
//! is no backing endpoint yet.

use leptos::prelude::*;

use crate::components::text_field::TextField;
use crate::state::notify::NotifyStore;
use crate::util::delay::after;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AccountTab {
    Personal,
    Address,
    Banking,
}

impl AccountTab {
    const ALL: [Self; 3] = [Self::Personal, Self::Address, Self::Banking];

    fn label(self) -> &'static str {
        match self {
            Self::Personal => "Dados Pessoais",
            Self::Address => "Endereço",
            Self::Banking => "Dados Bancários",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ProfileForm {
    nome: String,
    sobrenome: String,
    cpf: String,
    data_nascimento: String,
    telefone: String,
    cep: String,
    rua: String,
    numero: String,
    bairro: String,
    cidade: String,
    estado: String,
    tipo_conta: String,
    banco: String,
    agencia: String,
    numero_conta: String,
}

impl ProfileForm {
    fn fields(&self) -> [&str; 15] {
        [
            &self.nome,
            &self.sobrenome,
            &self.cpf,
            &self.data_nascimento,
            &self.telefone,
            &self.cep,
            &self.rua,
            &self.numero,
            &self.bairro,
            &self.cidade,
            &self.estado,
            &self.tipo_conta,
            &self.banco,
            &self.agencia,
            &self.numero_conta,
        ]
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    fn completion_percent(&self) -> u32 {
        let fields = self.fields();
        let filled = fields.iter().filter(|field| !field.is_empty()).count();
        ((filled as f64 / fields.len() as f64) * 100.0).round() as u32
    }

    fn tab_complete(&self, tab: AccountTab) -> bool {
        match tab {
            AccountTab::Personal => {
                !self.nome.is_empty() && !self.sobrenome.is_empty() && !self.cpf.is_empty()
            }
            AccountTab::Address => {
                !self.cep.is_empty() && !self.rua.is_empty() && !self.numero.is_empty()
            }
            AccountTab::Banking => {
                !self.banco.is_empty() && !self.agencia.is_empty() && !self.numero_conta.is_empty()
            }
        }
    }
}

fn profile_field(
    label: &'static str,
    placeholder: &'static str,
    form: RwSignal<ProfileForm>,
    get: fn(&ProfileForm) -> &String,
    set: fn(&mut ProfileForm, String),
) -> impl IntoView {
    view! {
        <TextField
            label=label
            placeholder=placeholder
            value=Signal::derive(move || get(&form.get()).clone())
            on_input=Callback::new(move |value| form.update(|form| set(form, value)))
        />
    }
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let notify = expect_context::<NotifyStore>();

    let active_tab = RwSignal::new(AccountTab::Personal);
    let form = RwSignal::new(ProfileForm::default());
    let is_submitting = RwSignal::new(false);

    let progress = move || form.get().completion_percent();

    let submit = move |_| {
        if is_submitting.get() {
            return;
        }
        is_submitting.set(true);
        after(1_500, move || {
            is_submitting.set(false);
            notify.success("Dados salvos com sucesso!");
        });
    };

    view! {
        <div class="account-page">
            <header class="account-page__header">
                <h1>"Meu Cadastro"</h1>
                <div class="account-page__progress">
                    <div class="account-page__progress-bar">
                        <div
                            class="account-page__progress-fill"
                            style:width=move || format!("{}%", progress())
                        ></div>
                    </div>
                    <span class="account-page__progress-label">
                        {move || format!("{}% completo", progress())}
                    </span>
                </div>
            </header>

            <nav class="account-page__tabs">
                {AccountTab::ALL
                    .iter()
                    .map(|&tab| {
                        view! {
                            <button
                                class="account-page__tab"
                                class=("account-page__tab--active", move || active_tab.get() == tab)
                                class=("account-page__tab--complete", move || form.get().tab_complete(tab))
                                on:click=move |_| active_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            {move || match active_tab.get() {
                AccountTab::Personal => {
                    view! {
                        <div class="account-page__section">
                            {profile_field("Nome", "Nome", form, |f| &f.nome, |f, v| f.nome = v)}
                            {profile_field(
                                "Sobrenome",
                                "Sobrenome",
                                form,
                                |f| &f.sobrenome,
                                |f, v| f.sobrenome = v,
                            )}
                            {profile_field("CPF", "000.000.000-00", form, |f| &f.cpf, |f, v| f.cpf = v)}
                            {profile_field(
                                "Data de nascimento",
                                "dd/mm/aaaa",
                                form,
                                |f| &f.data_nascimento,
                                |f, v| f.data_nascimento = v,
                            )}
                            {profile_field(
                                "Telefone",
                                "(00) 00000-0000",
                                form,
                                |f| &f.telefone,
                                |f, v| f.telefone = v,
                            )}
                        </div>
                    }
                        .into_any()
                }
                AccountTab::Address => {
                    view! {
                        <div class="account-page__section">
                            {profile_field("CEP", "00000-000", form, |f| &f.cep, |f, v| f.cep = v)}
                            {profile_field("Rua", "Rua", form, |f| &f.rua, |f, v| f.rua = v)}
                            {profile_field("Número", "Número", form, |f| &f.numero, |f, v| f.numero = v)}
                            {profile_field("Bairro", "Bairro", form, |f| &f.bairro, |f, v| f.bairro = v)}
                            {profile_field("Cidade", "Cidade", form, |f| &f.cidade, |f, v| f.cidade = v)}
                            {profile_field("Estado", "UF", form, |f| &f.estado, |f, v| f.estado = v)}
                        </div>
                    }
                        .into_any()
                }
                AccountTab::Banking => {
                    view! {
                        <div class="account-page__section">
                            {profile_field(
                                "Tipo de conta",
                                "Corrente ou poupança",
                                form,
                                |f| &f.tipo_conta,
                                |f, v| f.tipo_conta = v,
                            )}
                            {profile_field("Banco", "Banco", form, |f| &f.banco, |f, v| f.banco = v)}
                            {profile_field(
                                "Agência",
                                "0000",
                                form,
                                |f| &f.agencia,
                                |f, v| f.agencia = v,
                            )}
                            {profile_field(
                                "Número da conta",
                                "00000-0",
                                form,
                                |f| &f.numero_conta,
                                |f, v| f.numero_conta = v,
                            )}
                        </div>
                    }
                        .into_any()
                }
            }}

            <footer class="account-page__footer">
                <button
                    class="btn btn--primary"
                    disabled=move || is_submitting.get()
                    on:click=submit
                >
                    {move || if is_submitting.get() { "Salvando..." } else { "Salvar" }}
                </button>
            </footer>
        </div>
    }
}
